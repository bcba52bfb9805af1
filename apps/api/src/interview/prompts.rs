// LLM prompt constants for the interview flow.
// Both prompts ask for bare JSON, but the parsers never rely on the model obeying.

/// System prompt for question generation.
pub const QUESTION_GENERATION_SYSTEM: &str = "You are an expert technical interviewer for \
    backend developer positions. Generate challenging but fair questions that assess both \
    theoretical knowledge and practical experience.";

/// Question generation prompt. Expected reply: a JSON array of question strings.
pub const QUESTION_GENERATION_PROMPT: &str = "Generate 5 technical interview questions for a \
    backend developer position, focusing on System Design, API Development, Database Management, \
    Security, and Problem Solving. Return only a JSON array of question strings without any \
    additional formatting or explanation.";

/// System prompt for answer scoring.
pub const RESPONSE_SCORING_SYSTEM: &str = "You are an expert technical interviewer evaluating a \
    backend developer candidate's response. Provide constructive feedback that highlights both \
    strengths and areas for improvement.";

/// Answer scoring prompt template. Replace `{answer_text}` before sending.
pub const RESPONSE_SCORING_PROMPT_TEMPLATE: &str = "Evaluate this response to a backend development question:
{answer_text}

Provide evaluation in JSON format with keys: technical_score (0-10), communication_score (0-10), and feedback (string)";
