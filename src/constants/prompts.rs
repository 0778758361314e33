pub const MODULE_FORMAT_INSTRUCTIONS: &str = "Produce a JSON object EXACTLY in this format (no extra commentary):
{
  \"essay\": \"<900-1200 word essay here>\",
  \"comprehension\": [{\"question\":\"<question>\",\"answer\":\"<brief 20-40 word answer>\"}, ...],
  \"mcq\": [{\"question\":\"<question>\",\"options\":[\"optA\",\"optB\",\"optC\",\"optD\"],\"answer\":\"<correct option text>\"}, ...]
}";

pub const MODULE_LEVEL_INSTRUCTIONS: &str = "Essay must be academic (UGC NET / MA-level).";

/// Builds the single prompt sent for one essay slot.
pub fn module_prompt(prompt_topic: &str, comprehension_count: usize, mcq_count: usize) -> String {
    format!(
        "{prompt_topic}\n\n{MODULE_FORMAT_INSTRUCTIONS}\n\n{MODULE_LEVEL_INSTRUCTIONS} Provide {comprehension_count} comprehension Q&As and {mcq_count} MCQs, each MCQ with exactly 4 options."
    )
}
