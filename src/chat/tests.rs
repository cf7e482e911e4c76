use actix_web::{web, App};

use super::client::{extract_reply, ChatClient, ChatError, GenerateRequest, GenerateResponse};
use super::prompt::{build_prompt, FALLBACK_REPLY};
use super::routes::{configure, ChatReply};
use crate::config::ChatConfig;

#[test]
fn prompt_carries_persona_and_question() {
    let prompt = build_prompt("What helps with a sore throat?");

    assert!(prompt.starts_with("You are Sushruta"));
    assert!(prompt.contains("healthcare-related information only"));
    assert!(prompt.ends_with("User's question: What helps with a sore throat?"));
}

#[test]
fn request_body_matches_the_upstream_wire_shape() {
    let request = GenerateRequest::for_question("hello");
    let value = serde_json::to_value(&request).unwrap();

    assert!(value["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("hello"));
    let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
    assert_eq!(value["generationConfig"]["topK"], 40);
    assert_eq!(value["generationConfig"]["maxOutputTokens"], 1024);
    assert_eq!(value["safetySettings"].as_array().unwrap().len(), 4);
    assert_eq!(
        value["safetySettings"][0]["threshold"],
        "BLOCK_MEDIUM_AND_ABOVE"
    );
}

#[test]
fn reply_is_taken_from_the_first_candidate() {
    let response: GenerateResponse = serde_json::from_str(
        r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Drink warm fluids and rest." } ] } },
                { "content": { "parts": [ { "text": "second candidate" } ] } }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        extract_reply(response).unwrap(),
        "Drink warm fluids and rest."
    );
}

#[test]
fn empty_candidates_are_malformed() {
    let response: GenerateResponse = serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
    assert!(matches!(
        extract_reply(response),
        Err(ChatError::Malformed(_))
    ));
}

#[test]
fn blank_text_is_malformed() {
    let response: GenerateResponse = serde_json::from_str(
        r#"{ "candidates": [ { "content": { "parts": [ { "text": "   " } ] } } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        extract_reply(response),
        Err(ChatError::Malformed(_))
    ));
}

#[actix_web::test]
async fn unreachable_upstream_degrades_to_the_fallback_reply() {
    // Nothing listens on this port, so the client fails fast with a
    // connection error instead of a timeout.
    let client = ChatClient::new(&ChatConfig {
        api_url: "http://127.0.0.1:1/generateContent".to_string(),
        api_key: String::new(),
    })
    .unwrap();

    let app = actix_web::test::init_service(
        App::new()
            .app_data(web::Data::new(client))
            .configure(configure),
    )
    .await;

    let req = actix_web::test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({ "message": "hi" }))
        .to_request();
    let reply: ChatReply = actix_web::test::call_and_read_body_json(&app, req).await;

    assert_eq!(reply.reply, FALLBACK_REPLY);
}
