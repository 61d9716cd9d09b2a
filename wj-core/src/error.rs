use thiserror::Error;

/// The one error kind raised when text does not follow the journal grammar,
/// or when an `Entry` cannot be written in a form that reads back identically.
///
/// Every variant carries the offending line or value so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("entry is not valid UTF-8")]
    NotUtf8,
    #[error("missing or malformed date header `{0}`, expected a line like `March 4, 2024`")]
    InvalidDate(String),
    #[error("no `To Do` line found")]
    MissingToDo,
    #[error("no `Done` line found after `To Do`")]
    MissingDone,
    #[error("no task lines found after `Done`, expected a line like `09:30 work Title`")]
    NoTasks,
    #[error("malformed task title line `{0}`, expected `HH:MM tag[,tag] Title`")]
    MalformedTitleLine(String),
    #[error("invalid start time `{0}`, expected a 24-hour time `HH:MM`")]
    InvalidTime(String),
    #[error("empty tag in tag group `{0}`")]
    EmptyTag(String),
    #[error("tag `{0}` may only contain letters, digits, `_` and `-`")]
    IllegalTag(String),
    #[error("`{0}` must fit on a single line")]
    MultilineField(String),
    #[error("whitespace around `{0}` would be lost when read back")]
    LostWhitespace(String),
    #[error("body line `{0}` would be read back as a new task")]
    AmbiguousBody(String),
}
