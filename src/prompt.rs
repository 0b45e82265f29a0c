use crate::utils::text::truncate_words;

/// Content handed to the model is cut tighter than normalization so small
/// local models stay focused.
pub const MAX_PROMPT_WORDS: usize = 400;

/// Continuation cue that closes every prompt.
pub const RESPONSE_CUE: &str = "The main points are: ";

/// Section markers of the instruction template. Also used as stop sequences.
pub const INSTRUCTION_MARKER: &str = "### Instruction:";
pub const INPUT_MARKER: &str = "### Input:";
pub const RESPONSE_MARKER: &str = "### Response:";

/// Stop sequences passed to the inference engine.
pub const STOP_SEQUENCES: [&str; 4] = [INSTRUCTION_MARKER, INPUT_MARKER, RESPONSE_MARKER, "\n\n\n"];

/// Builds the instruction prompt for a completion-style model.
///
/// The prompt ends on [`RESPONSE_CUE`] so the model continues with summary
/// text instead of more of the source narrative.
#[must_use]
pub fn build_prompt(content: &str, target_words: usize) -> String {
    let content = truncate_words(content, MAX_PROMPT_WORDS);

    format!(
        "Below is an instruction that describes a task. Write a response that appropriately completes the request.\n\
         \n\
         {INSTRUCTION_MARKER}\n\
         Read the following text and write a concise summary that captures the main ideas in about {target_words} words.\n\
         \n\
         {INPUT_MARKER}\n\
         {content}\n\
         \n\
         {RESPONSE_MARKER}\n\
         {RESPONSE_CUE}"
    )
}
