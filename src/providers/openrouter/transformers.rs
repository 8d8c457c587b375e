//! Translation between the normalized schema and the OpenRouter wire schema.
//!
//! Everything here is pure and total: malformed or partial wire data maps to
//! empty output rather than an error. Function call and function response
//! parts are rendered as bracketed text placeholders because the wire schema
//! has no structural representation for them; the conversion is lossy.

use crate::types::{
    Candidate, Content, ContentInput, FinishReason, GenerateContentRequest,
    GenerateContentResponse, Part, UsageMetadata,
};

use super::types::{
    MessageContent, OpenRouterMessage, OpenRouterRequest, OpenRouterResponse,
    OpenRouterStreamEvent,
};

/// Build the wire request body for a normalized request.
///
/// The streaming flag is left unset; the caller decides per call path.
pub(crate) fn build_request(model: &str, request: &GenerateContentRequest) -> OpenRouterRequest {
    let config = request.config.as_ref();
    let mut messages = Vec::new();

    if let Some(instruction) = config.and_then(|c| c.system_instruction.as_ref()) {
        messages.push(OpenRouterMessage {
            role: "system".to_string(),
            content: MessageContent::Text(system_instruction_text(instruction)),
        });
    }

    for entry in &request.contents {
        messages.push(match entry {
            ContentInput::Text(text) => OpenRouterMessage {
                role: "user".to_string(),
                content: MessageContent::Text(text.clone()),
            },
            ContentInput::Content(content) => OpenRouterMessage {
                // Roles other than `model` pass through unchanged
                role: if content.role == "model" {
                    "assistant".to_string()
                } else {
                    content.role.clone()
                },
                content: MessageContent::Text(render_parts(&content.parts)),
            },
        });
    }

    OpenRouterRequest {
        model: model.to_string(),
        messages,
        temperature: config.and_then(|c| c.temperature),
        max_tokens: config.and_then(|c| c.max_output_tokens),
        top_p: config.and_then(|c| c.top_p),
        stream: None,
    }
}

/// Text of a system instruction: text parts only, newline-joined
fn system_instruction_text(instruction: &Content) -> String {
    let texts: Vec<&str> = instruction
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .filter(|text| !text.is_empty())
        .collect();
    texts.join("\n")
}

/// Render conversation parts to wire text.
///
/// Function calls and responses become bracketed placeholders; empty
/// fragments are dropped before joining.
fn render_parts(parts: &[Part]) -> String {
    let fragments: Vec<String> = parts
        .iter()
        .filter_map(|part| {
            if let Some(text) = &part.text {
                (!text.is_empty()).then(|| text.clone())
            } else if let Some(call) = &part.function_call {
                Some(format!("[Function Call: {}]", call.name))
            } else if part.function_response.is_some() {
                Some("[Function Response]".to_string())
            } else {
                None
            }
        })
        .collect();
    fragments.join("\n")
}

/// Normalize a complete wire response.
///
/// Only the first choice is consumed; an empty choice list yields an empty
/// candidate list.
pub(crate) fn convert_response(response: OpenRouterResponse) -> GenerateContentResponse {
    let candidates = response
        .choices
        .into_iter()
        .next()
        .map(|choice| {
            vec![Candidate {
                content: Content::new(
                    "model",
                    vec![Part::text(choice.message.content.unwrap_or_default())],
                ),
                finish_reason: choice.finish_reason.as_deref().map(map_finish_reason),
                index: 0,
            }]
        })
        .unwrap_or_default();

    let usage_metadata = response.usage.map(|usage| UsageMetadata {
        prompt_token_count: usage.prompt_tokens,
        candidates_token_count: usage.completion_tokens,
        total_token_count: usage.total_tokens,
    });

    GenerateContentResponse {
        candidates,
        usage_metadata,
    }
}

/// Normalize one streaming event.
///
/// Returns `None` unless the first choice carries a non-empty content delta;
/// role-only and empty deltas produce no output. Stream chunks never carry a
/// finish reason.
pub(crate) fn convert_stream_event(event: OpenRouterStreamEvent) -> Option<GenerateContentResponse> {
    let delta = event.choices?.into_iter().next()?.delta?;
    let text = delta.content?;
    if text.is_empty() {
        return None;
    }
    Some(GenerateContentResponse {
        candidates: vec![Candidate {
            content: Content::new("model", vec![Part::text(text)]),
            finish_reason: None,
            index: 0,
        }],
        usage_metadata: None,
    })
}

/// Map a wire finish reason onto the normalized enum.
///
/// The table is part of the adapter's compatibility contract:
/// `function_call` maps to `Stop` and every unknown value to `Other`.
pub(crate) fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::MaxTokens,
        "content_filter" => FinishReason::Safety,
        "function_call" => FinishReason::Stop,
        _ => FinishReason::Other,
    }
}

/// Estimate the token count of the given contents.
///
/// OpenRouter has no counting endpoint, so the estimate is one token per
/// four characters of rendered text, rounded up. The divisor is policy, not
/// tokenizer-derived; changing it is a compatibility break for callers that
/// budget against it. Bare-string turns carry no parts and contribute
/// nothing.
pub(crate) fn estimate_tokens(contents: &[ContentInput]) -> u32 {
    let text = contents
        .iter()
        .filter_map(|entry| match entry {
            ContentInput::Content(content) => {
                let rendered = render_parts(&content.parts);
                (!rendered.is_empty()).then_some(rendered)
            }
            ContentInput::Text(_) => None,
        })
        .collect::<Vec<_>>()
        .join("\n");
    text.chars().count().div_ceil(4) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FunctionCall, FunctionResponse, GenerateContentConfig};

    use super::super::types::{
        OpenRouterChoice, OpenRouterResponseMessage, OpenRouterStreamChoice,
        OpenRouterStreamDelta, OpenRouterUsage,
    };

    fn request_with_config(config: GenerateContentConfig) -> GenerateContentRequest {
        GenerateContentRequest::new("anthropic/claude-3-opus", vec![Content::user("Hello").into()])
            .with_config(config)
    }

    #[test]
    fn system_instruction_becomes_first_message() {
        let config = GenerateContentConfig::new().with_system_instruction(Content::new(
            "system",
            vec![Part::text("You are a helpful assistant"), Part::text("Be brief")],
        ));
        let wire = build_request("anthropic/claude-3-opus", &request_with_config(config));

        assert_eq!(wire.messages[0].role, "system");
        match &wire.messages[0].content {
            MessageContent::Text(text) => {
                assert_eq!(text, "You are a helpful assistant\nBe brief");
            }
            other => panic!("expected text content, got {other:?}"),
        }
        assert_eq!(wire.messages[1].role, "user");
    }

    #[test]
    fn model_role_maps_to_assistant_and_others_pass_through() {
        let request = GenerateContentRequest::new(
            "anthropic/claude-3-opus",
            vec![
                Content::user("Hi").into(),
                Content::model("Hello!").into(),
                Content::new("tool", vec![Part::text("ok")]).into(),
            ],
        );
        let wire = build_request("anthropic/claude-3-opus", &request);
        let roles: Vec<&str> = wire.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["user", "assistant", "tool"]);
    }

    #[test]
    fn bare_string_turn_becomes_user_message() {
        let request =
            GenerateContentRequest::new("anthropic/claude-3-opus", vec!["Just a prompt".into()]);
        let wire = build_request("anthropic/claude-3-opus", &request);
        assert_eq!(wire.messages[0].role, "user");
        match &wire.messages[0].content {
            MessageContent::Text(text) => assert_eq!(text, "Just a prompt"),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn function_parts_render_as_placeholders() {
        let content = Content::new(
            "model",
            vec![
                Part::text("Let me check."),
                Part::function_call(FunctionCall {
                    name: "get_weather".to_string(),
                    args: None,
                }),
                Part::function_response(FunctionResponse {
                    name: Some("get_weather".to_string()),
                    response: None,
                }),
            ],
        );
        let request = GenerateContentRequest::new("anthropic/claude-3-opus", vec![content.into()]);
        let wire = build_request("anthropic/claude-3-opus", &request);
        match &wire.messages[0].content {
            MessageContent::Text(text) => {
                assert_eq!(
                    text,
                    "Let me check.\n[Function Call: get_weather]\n[Function Response]"
                );
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn sampling_params_copied_verbatim_and_absent_ones_omitted() {
        let config = GenerateContentConfig::new()
            .with_temperature(0.7)
            .with_max_output_tokens(1000)
            .with_top_p(0.9);
        let wire = build_request("anthropic/claude-3-opus", &request_with_config(config));
        assert_eq!(wire.temperature, Some(0.7));
        assert_eq!(wire.max_tokens, Some(1000));
        assert_eq!(wire.top_p, Some(0.9));
        assert_eq!(wire.stream, None);

        let bare =
            build_request("anthropic/claude-3-opus", &GenerateContentRequest::new(
                "anthropic/claude-3-opus",
                vec![Content::user("Hi").into()],
            ));
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("top_p").is_none());
        assert!(json.get("stream").is_none());
    }

    #[test]
    fn first_choice_becomes_single_model_candidate() {
        let response = OpenRouterResponse {
            id: Some("gen-1".to_string()),
            choices: vec![OpenRouterChoice {
                message: OpenRouterResponseMessage {
                    role: Some("assistant".to_string()),
                    content: Some("Hello, world!".to_string()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(OpenRouterUsage {
                prompt_tokens: Some(10),
                completion_tokens: Some(5),
                total_tokens: Some(15),
            }),
        };

        let normalized = convert_response(response);
        assert_eq!(normalized.candidates.len(), 1);
        let candidate = &normalized.candidates[0];
        assert_eq!(candidate.content.role, "model");
        assert_eq!(candidate.content.parts[0].text.as_deref(), Some("Hello, world!"));
        assert_eq!(candidate.finish_reason, Some(FinishReason::Stop));
        assert_eq!(candidate.index, 0);

        let usage = normalized.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, Some(10));
        assert_eq!(usage.candidates_token_count, Some(5));
        assert_eq!(usage.total_token_count, Some(15));
    }

    #[test]
    fn empty_choice_list_yields_no_candidates() {
        let response = OpenRouterResponse {
            id: None,
            choices: vec![],
            usage: None,
        };
        let normalized = convert_response(response);
        assert!(normalized.candidates.is_empty());
        assert!(normalized.usage_metadata.is_none());
    }

    #[test]
    fn finish_reason_table_is_exact() {
        assert_eq!(map_finish_reason("stop"), FinishReason::Stop);
        assert_eq!(map_finish_reason("length"), FinishReason::MaxTokens);
        assert_eq!(map_finish_reason("content_filter"), FinishReason::Safety);
        assert_eq!(map_finish_reason("function_call"), FinishReason::Stop);
        assert_eq!(map_finish_reason("tool_calls"), FinishReason::Other);
        assert_eq!(map_finish_reason(""), FinishReason::Other);
    }

    #[test]
    fn stream_event_with_content_emits_one_chunk() {
        let event = OpenRouterStreamEvent {
            choices: Some(vec![OpenRouterStreamChoice {
                delta: Some(OpenRouterStreamDelta {
                    role: None,
                    content: Some("Hello".to_string()),
                }),
            }]),
        };
        let chunk = convert_stream_event(event).unwrap();
        assert_eq!(chunk.candidates[0].content.parts[0].text.as_deref(), Some("Hello"));
        assert_eq!(chunk.candidates[0].finish_reason, None);
    }

    #[test]
    fn role_only_and_empty_deltas_are_skipped() {
        let role_only = OpenRouterStreamEvent {
            choices: Some(vec![OpenRouterStreamChoice {
                delta: Some(OpenRouterStreamDelta {
                    role: Some("assistant".to_string()),
                    content: None,
                }),
            }]),
        };
        assert!(convert_stream_event(role_only).is_none());

        let empty = OpenRouterStreamEvent {
            choices: Some(vec![OpenRouterStreamChoice {
                delta: Some(OpenRouterStreamDelta {
                    role: None,
                    content: Some(String::new()),
                }),
            }]),
        };
        assert!(convert_stream_event(empty).is_none());

        assert!(convert_stream_event(OpenRouterStreamEvent { choices: None }).is_none());
    }

    #[test]
    fn token_estimate_is_ceil_of_quarter_length() {
        let contents = vec![Content::user("This is a test message").into()];
        // 22 characters -> ceil(22 / 4) = 6
        assert_eq!(estimate_tokens(&contents), 6);
    }

    #[test]
    fn token_estimate_counts_characters_not_bytes() {
        let contents = vec![Content::user("café").into()];
        // 4 characters (5 bytes) -> 1 token
        assert_eq!(estimate_tokens(&contents), 1);
    }

    #[test]
    fn token_estimate_is_zero_for_empty_contents() {
        assert_eq!(estimate_tokens(&[]), 0);
        // Bare strings carry no parts and are not counted
        assert_eq!(estimate_tokens(&["prompt".into()]), 0);
    }
}
