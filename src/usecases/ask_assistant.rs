use crate::domain::{
    assistant_state::AssistantState,
    responder::{respond, RuleBook, FALLBACK_RESPONSE},
};

/// Submits the assistant input: the question and its answer are appended
/// to the history together and the input is cleared.
pub fn submit_question(assistant: &mut AssistantState, rules: &RuleBook) -> String {
    let question = assistant.input_mut().take();
    let answer = respond(&question, rules).to_owned();

    tracing::debug!(
        question_chars = question.chars().count(),
        matched = answer != FALLBACK_RESPONSE,
        history_len = assistant.history().len() + 2,
        "assistant answered"
    );

    assistant.history_mut().push_exchange(question, answer.clone());
    answer
}
