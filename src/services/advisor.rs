use crate::error::AppError;
use crate::services::cleaner::ResponseCleaner;
use crate::services::generation::TextGenerator;
use crate::services::language::detect_language;

/// Instruction sent ahead of every user message. The detected language tag
/// is embedded so the model answers in the language the user wrote in.
fn build_system_instruction(lang: &str) -> String {
    format!(
        "You are SmartLoanMate, an AI loan advisor. Reply in the user's language ({lang}). \
         Answer clearly, using bullet points or numbering where needed. \
         Help with loan advice, EMI calculation, document info, and application process."
    )
}

fn build_prompt(system_instruction: &str, message: &str) -> String {
    format!("{system_instruction}\n\nUser: {message}\nAI:")
}

/// Run one advisory exchange: detect the message language, build the
/// prompt, call the generator, and clean the reply.
pub async fn advise(
    generator: &dyn TextGenerator,
    cleaner: &ResponseCleaner,
    message: &str,
) -> Result<String, AppError> {
    let lang = detect_language(message)?;
    let prompt = build_prompt(&build_system_instruction(lang), message);

    tracing::debug!(lang, generator = generator.name(), "dispatching prompt");

    let raw = generator.generate(&prompt).await?;
    Ok(cleaner.clean(&raw))
}
