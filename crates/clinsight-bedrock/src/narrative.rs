//! Hypothesis narrative enrichment via the Bedrock Converse API.
//!
//! Builds a structured context block from the hypothesis and patient
//! context, sends it with a fixed system prompt, and returns the model's
//! prose. The caller (the orchestrator) bounds the call with a timeout and
//! falls back to the rule-derived reasoning on any failure.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use tracing::info;

use clinsight_core::models::hypothesis::DiagnosticHypothesis;
use clinsight_core::models::patient::PatientContext;
use clinsight_engine::error::BoxError;
use clinsight_engine::orchestrator::NarrativeEnricher;

use crate::error::BedrockError;
use crate::tokens;

const NARRATIVE_SYSTEM_PROMPT: &str = "\
You are writing the rationale section of a clinical decision-support note. \
Rewrite the supplied rule-derived reasoning as two or three sentences of \
clear clinical prose. Do not change, add, or remove any probability, \
diagnosis, or recommendation. Return only the prose.";

/// Bedrock-backed implementation of the engine's enrichment seam.
pub struct BedrockEnricher {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockEnricher {
    pub fn new(client: aws_sdk_bedrockruntime::Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

impl NarrativeEnricher for BedrockEnricher {
    async fn enrich(
        &self,
        hypothesis: &DiagnosticHypothesis,
        context: &PatientContext,
    ) -> Result<String, BoxError> {
        let text = enrich_narrative(&self.client, &self.model_id, hypothesis, context).await?;
        Ok(text)
    }
}

/// Build the structured user message for an enrichment call.
///
/// An XML-style block: the model sees the hypothesis fields and the patient
/// context it may reference, nothing else.
pub fn build_hypothesis_block(
    hypothesis: &DiagnosticHypothesis,
    context: &PatientContext,
) -> String {
    let mut block = String::from("<hypothesis>\n");
    block.push_str(&format!("condition: {}\n", hypothesis.condition_name));
    block.push_str(&format!(
        "probability: {:.2}\n",
        hypothesis.probability
    ));
    block.push_str(&format!("reasoning: {}\n", hypothesis.reasoning));
    if !hypothesis.supporting_evidence.is_empty() {
        let findings: Vec<&str> = hypothesis
            .supporting_evidence
            .iter()
            .map(|e| e.finding.as_str())
            .collect();
        block.push_str(&format!("supporting_findings: {}\n", findings.join(", ")));
    }
    block.push_str("</hypothesis>\n<patient>\n");
    if let Some(age) = context.age {
        block.push_str(&format!("age: {age}\n"));
    }
    if let Some(gender) = &context.gender {
        block.push_str(&format!("gender: {gender}\n"));
    }
    if !context.medical_history.is_empty() {
        block.push_str(&format!(
            "history: {}\n",
            context.medical_history.join(", ")
        ));
    }
    block.push_str("</patient>");
    block
}

/// Invoke the Converse API for one hypothesis.
pub async fn enrich_narrative(
    client: &aws_sdk_bedrockruntime::Client,
    model_id: &str,
    hypothesis: &DiagnosticHypothesis,
    context: &PatientContext,
) -> Result<String, BedrockError> {
    let user_message = build_hypothesis_block(hypothesis, context);

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(
            NARRATIVE_SYSTEM_PROMPT.to_string(),
        ))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if let Some(usage) = response.usage() {
        let counts = tokens::extract_token_usage(usage);
        info!(
            model_id,
            condition = %hypothesis.condition,
            input_tokens = counts.input,
            output_tokens = counts.output,
            "narrative enrichment complete"
        );
    }

    Ok(text)
}
