/// Library error rendered through miette, carrying the library's advice as help text.
#[derive(Debug, miette::Diagnostic, thiserror::Error)]
#[error("{message}")]
pub(crate) struct RunError {
    message: String,

    #[help]
    advice: Option<String>,

    #[source]
    source: wordlist::Error,
}

impl From<wordlist::Error> for RunError {
    fn from(source: wordlist::Error) -> Self {
        let message = match source.path() {
            Some(path) => format!("failed to normalize wordlist ({})", path.display()),
            None => "failed to normalize wordlist".to_string(),
        };
        Self {
            message,
            advice: source.advice().map(ToString::to_string),
            source,
        }
    }
}
