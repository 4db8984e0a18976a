// ABOUTME: Integration tests for the advisory prompt builders
// ABOUTME: Checks embedded data, optional product fields, image wording, and companion variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{food_record, merchandise_record};
use ecolens_server::footprint::{calculate_footprint, EmissionFactors};
use ecolens_server::llm::prompts::{
    climate_education, companion_message, footprint_advice, product_eco_analysis,
    ProductAnalysisContext,
};
use ecolens_server::llm::{ImageAttachment, PromptTask};
use ecolens_server::models::{CompanionMessageType, LifestyleInput};

fn reference_input() -> LifestyleInput {
    serde_json::from_value(serde_json::json!({
        "transport": { "mode": "car", "distancePerDay": 10 },
        "electricity": { "unitsPerMonth": 100 },
        "food": { "habit": "nonVeg" },
        "lifestyle": { "shoppingFrequency": "medium", "deviceHours": 4 }
    }))
    .unwrap()
}

fn sample_image() -> ImageAttachment {
    ImageAttachment::from_encoded("data:image/png;base64,iVBORw0KGgo=").unwrap()
}

// ============================================================================
// Footprint advice
// ============================================================================

#[test]
fn test_advice_embeds_footprint_and_answers() {
    let input = reference_input();
    let footprint = calculate_footprint(&input, &EmissionFactors::STANDARD).unwrap();
    let prompt = footprint_advice(&footprint, &input);

    assert_eq!(prompt.task, PromptTask::FootprintAdvice);
    assert!(prompt.image.is_none());
    assert!(prompt.text.contains("Carbon Footprint: 454 kg CO₂/month"));
    assert!(prompt.text.contains("- Transport: 63 kg"));
    assert!(prompt.text.contains("- Food: 216 kg"));
    assert!(prompt
        .text
        .contains("User: car, 10 km/day, 100 units/month, nonVeg diet, medium shopping, 4 hrs devices/day"));
}

#[test]
fn test_advice_requests_five_tips_without_markup() {
    let input = reference_input();
    let footprint = calculate_footprint(&input, &EmissionFactors::STANDARD).unwrap();
    let text = footprint_advice(&footprint, &input).text;

    assert!(text.contains("provide 5 separate tips"));
    assert!(text.contains("NO markdown, NO asterisks, NO numbered lists, NO bullet points"));
    assert!(!text.contains("{{"));
}

// ============================================================================
// Product analysis
// ============================================================================

#[test]
fn test_verified_block_lists_only_present_fields() {
    let record = food_record();
    let prompt = product_eco_analysis(ProductAnalysisContext {
        barcode: Some("5012345678900"),
        product: Some(&record),
        ..ProductAnalysisContext::default()
    });
    let text = prompt.text;

    assert!(text.contains("VERIFIED PRODUCT DATA from Open Food Facts:"));
    assert!(text.contains("Product Name: Organic Oat Drink"));
    assert!(text.contains("Brand: Oatly"));
    assert!(text.contains("Ingredients: Water, oats 10%, rapeseed oil"));
    assert!(text.contains("Packaging: Tetra Pak"));
    assert!(text.contains("Nutri-Score: b"));
    assert!(text.contains("Eco-Score: a"));
    assert!(!text.contains("Labels:"));
    assert!(!text.contains("Description:"));
    assert!(text.contains("Product: Organic Oat Drink\n"));
    assert!(text.contains("(based on verified product data)"));
    assert!(!text.contains("not found in product databases"));
}

#[test]
fn test_upc_record_includes_description() {
    let record = merchandise_record();
    let text = product_eco_analysis(ProductAnalysisContext {
        product: Some(&record),
        ..ProductAnalysisContext::default()
    })
    .text;

    assert!(text.contains("VERIFIED PRODUCT DATA from UPC Item DB:"));
    assert!(text.contains("Description: Insulated 750ml bottle"));
    assert!(!text.contains("Ingredients:"));
}

#[test]
fn test_unresolved_barcode_is_mentioned() {
    let text = product_eco_analysis(ProductAnalysisContext {
        product_name: Some("Bamboo toothbrush"),
        barcode: Some("123"),
        ..ProductAnalysisContext::default()
    })
    .text;

    assert!(text.contains(
        "Barcode: 123 (not found in product databases, analyzing from description/image)"
    ));
    assert!(text.contains("Product: Bamboo toothbrush\n"));
    assert!(text.contains("(based on general product category)"));
    assert!(!text.contains("VERIFIED PRODUCT DATA"));
}

#[test]
fn test_user_name_wins_over_record_name() {
    let record = food_record();
    let text = product_eco_analysis(ProductAnalysisContext {
        product_name: Some("Oat milk"),
        product: Some(&record),
        ..ProductAnalysisContext::default()
    })
    .text;
    assert!(text.contains("Product: Oat milk\n"));
}

#[test]
fn test_description_line_is_optional() {
    let with = product_eco_analysis(ProductAnalysisContext {
        product_name: Some("Paper cup"),
        product_description: Some("Coffee cup with plastic lining"),
        ..ProductAnalysisContext::default()
    })
    .text;
    assert!(with.contains("Additional Description: Coffee cup with plastic lining\n"));

    let without = product_eco_analysis(ProductAnalysisContext {
        product_name: Some("Paper cup"),
        ..ProductAnalysisContext::default()
    })
    .text;
    assert!(!without.contains("Additional Description"));
}

#[test]
fn test_image_only_analysis_leads_with_image() {
    let prompt = product_eco_analysis(ProductAnalysisContext {
        image: Some(sample_image()),
        ..ProductAnalysisContext::default()
    });

    assert!(prompt
        .text
        .starts_with("Analyze the product in this image for eco-friendliness. "));
    assert!(prompt
        .text
        .contains("Product: Unknown Product (analyzing from image)"));
    assert_eq!(prompt.image.unwrap().mime_type, "image/png");
}

#[test]
fn test_named_product_image_is_supplementary() {
    let prompt = product_eco_analysis(ProductAnalysisContext {
        product_name: Some("Glass jar"),
        image: Some(sample_image()),
        ..ProductAnalysisContext::default()
    });

    assert!(prompt.text.ends_with(
        "\n\nAlso analyze the product from this image to provide more accurate assessment."
    ));
    assert!(!prompt.text.starts_with("Analyze the product in this image"));

    let request = prompt.into_request();
    assert!(request.has_images());
    assert_eq!(request.messages.len(), 1);
}

#[test]
fn test_product_prompt_requests_ten_sections() {
    let text = product_eco_analysis(ProductAnalysisContext {
        product_name: Some("Plastic bottle"),
        ..ProductAnalysisContext::default()
    })
    .text;

    for heading in [
        "1. Eco-Friendliness Score",
        "2. Carbon Footprint",
        "3. Materials",
        "4. Recycling",
        "5. Disposal",
        "6. Compostable",
        "7. Donation",
        "8. Environmental Concerns",
        "9. Sustainable Alternatives",
        "10. Price",
    ] {
        assert!(text.contains(heading), "missing section {heading}");
    }
}

// ============================================================================
// Companion
// ============================================================================

#[test]
fn test_celebration_includes_action_and_total() {
    let prompt = companion_message(
        CompanionMessageType::Celebration,
        Some("Cycled to work"),
        42.5,
    );
    assert_eq!(prompt.task, PromptTask::CompanionCelebration);
    assert!(prompt
        .text
        .contains("The user just completed a sustainable action: Cycled to work"));
    assert!(prompt.text.contains("Their total CO₂ saved: 42.5 kg"));
}

#[test]
fn test_celebration_without_action_uses_generic_wording() {
    let text = companion_message(CompanionMessageType::Celebration, None, 0.0).text;
    assert!(text.contains("sustainable action: a sustainable action"));
    assert!(text.contains("Their total CO₂ saved: 0 kg"));
}

#[test]
fn test_greeting_and_reminder_take_no_numbers() {
    let greeting = companion_message(CompanionMessageType::Greeting, Some("ignored"), 99.0);
    assert_eq!(greeting.task, PromptTask::CompanionGreeting);
    assert!(greeting.text.contains("The user just opened the app"));
    assert!(!greeting.text.contains("99"));
    assert!(!greeting.text.contains("ignored"));

    let reminder = companion_message(CompanionMessageType::Reminder, None, 99.0);
    assert_eq!(reminder.task, PromptTask::CompanionReminder);
    assert!(reminder.text.contains("hasn't taken eco-actions today"));
    assert!(!reminder.text.contains("99"));
}

// ============================================================================
// Climate education
// ============================================================================

#[test]
fn test_education_wraps_question() {
    let prompt = climate_education("  Why are glaciers melting?  ");
    assert_eq!(prompt.task, PromptTask::ClimateEducation);
    assert!(prompt.text.contains("\"Why are glaciers melting?\""));
    assert!(prompt.text.contains("Include one real-world example"));
    assert!(prompt.text.contains("End with one actionable insight"));
}

#[test]
fn test_question_text_is_inserted_verbatim() {
    let text = climate_education("what does {{question}} mean?").text;
    assert!(text.contains("\"what does {{question}} mean?\""));
}
