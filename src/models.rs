/// Raw model identifiers mapped to the names printed on receipts.
///
/// Identifiers not listed here are printed as-is.
pub static MODEL_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("claude-opus-4-6", "Claude Opus 4.6"),
    ("claude-opus-4-6-fast", "Claude Opus 4.6 Fast"),
    ("claude-opus-4-5-20251101", "Claude Opus 4.5"),
    ("claude-sonnet-4-5-20250929", "Claude Sonnet 4.5"),
    ("claude-haiku-4-5-20251001", "Claude Haiku 4.5"),
    ("gpt-5.1-codex-max", "GPT-5.1 Codex Max"),
    ("gpt-5.1-codex", "GPT-5.1 Codex"),
    ("gpt-5.1", "GPT-5.1"),
    ("gpt-5.2", "GPT-5.2"),
    ("gpt-5.2-codex", "GPT-5.2 Codex"),
    ("gpt-5.3-codex", "GPT-5.3 Codex"),
    ("gemini-3-pro-preview", "Gemini 3 Pro"),
    ("gemini-3-flash-preview", "Gemini 3 Flash"),
    ("glm-4.7", "Droid Core (GLM-4.7)"),
    ("glm-5", "Droid Core (GLM-5)"),
    ("kimi-k2.5", "Droid Core (Kimi K2.5)"),
    ("minimax-m2.5", "MiniMax M2.5"),
];

// Look up the display name, falling back to the raw identifier
pub fn display_model_name(model: &str) -> &str {
    MODEL_DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, name)| *name)
        .unwrap_or(model)
}
