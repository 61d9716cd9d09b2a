//! Finds the section boundaries of one entry's text.
//!
//! The scanner walks the text line by line, driven by [`ParseState`], and
//! returns byte ranges. It never interprets list items or task fields.

use crate::error::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use strum_macros::AsRefStr;

pub const TO_DO_MARKER: &str = "To Do";
pub const DONE_MARKER: &str = "Done";

/// `HH:MM tag[,tag]* title`. Field validation happens in the task block parser.
static TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2} [A-Za-z0-9_,-]+ ").unwrap());

/// Whether `line` starts a new task.
///
/// A body line shaped like a title line is read as a new task; there is no way
/// to tell the two apart.
pub fn is_title_line(line: &str) -> bool {
    TITLE_LINE.is_match(line)
}

/// Where the scanner is within an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ParseState {
    /// Before `To Do`. The first non-blank line is the date header.
    Date,
    ToDo,
    Done,
    Tasks,
    /// End of input reached with at least one task.
    Finished,
}

impl ParseState {
    /// The state entered when `line` is a boundary, `None` when `line` is
    /// content of the current section.
    ///
    /// `Tasks -> Tasks` means a new task starts on `line`.
    pub fn next(self, line: &str) -> Option<ParseState> {
        match self {
            ParseState::Date if line.trim_end() == TO_DO_MARKER => Some(ParseState::ToDo),
            ParseState::ToDo if line.trim_end() == DONE_MARKER => Some(ParseState::Done),
            ParseState::Done | ParseState::Tasks if is_title_line(line) => Some(ParseState::Tasks),
            _ => None,
        }
    }

    /// The terminal transition, taken at end of input.
    pub fn finish(self) -> Result<ParseState, FormatError> {
        match self {
            ParseState::Date => Err(FormatError::MissingToDo),
            ParseState::ToDo => Err(FormatError::MissingDone),
            ParseState::Done => Err(FormatError::NoTasks),
            ParseState::Tasks | ParseState::Finished => Ok(ParseState::Finished),
        }
    }
}

/// Byte ranges into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// The date header line, if any non-blank line precedes `To Do`.
    pub header: Option<Range<usize>>,
    pub to_do: Range<usize>,
    pub done: Range<usize>,
    /// One range per task, from its title line up to the next title line.
    pub tasks: Vec<Range<usize>>,
}

pub fn scan(text: &str) -> Result<Segments, FormatError> {
    let mut state = ParseState::Date;
    let mut header = None;
    let mut to_do_start = 0;
    let mut to_do = 0..0;
    let mut done_start = 0;
    let mut done = 0..0;
    let mut task_starts = Vec::new();

    let mut offset = 0;
    for raw_line in text.split_inclusive('\n') {
        let start = offset;
        offset += raw_line.len();
        let line = raw_line.trim_end_matches(|c: char| c == '\n' || c == '\r');

        let Some(next) = state.next(line) else {
            if state == ParseState::Date && header.is_none() && !line.trim().is_empty() {
                header = Some(start..start + line.len());
            }
            continue;
        };
        match next {
            ParseState::ToDo => to_do_start = offset,
            ParseState::Done => {
                to_do = to_do_start..start;
                done_start = offset;
            }
            _ => {
                if state == ParseState::Done {
                    done = done_start..start;
                }
                task_starts.push(start);
            }
        }
        state = next;
    }
    state.finish()?;

    let mut tasks = Vec::with_capacity(task_starts.len());
    for (i, &start) in task_starts.iter().enumerate() {
        let end = task_starts.get(i + 1).copied().unwrap_or(text.len());
        tasks.push(start..end);
    }

    Ok(Segments {
        header,
        to_do,
        done,
        tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::SAMPLE_ENTRY;

    #[test]
    fn state_transitions() {
        use ParseState::*;
        assert_eq!(Date.next("March 4, 2024"), None);
        assert_eq!(Date.next("To Do"), Some(ToDo));
        assert_eq!(Date.next("Done"), None);
        assert_eq!(ToDo.next("- Done"), None);
        assert_eq!(ToDo.next("Done"), Some(Done));
        assert_eq!(ToDo.next("09:00 work Title"), None);
        assert_eq!(Done.next("- shipped"), None);
        assert_eq!(Done.next("09:00 work Title"), Some(Tasks));
        assert_eq!(Tasks.next("a body line"), None);
        assert_eq!(Tasks.next("To Do"), None);
        assert_eq!(Tasks.next("10:00 work,meeting Standup"), Some(Tasks));
        assert_eq!(Finished.next("10:00 work Title"), None);
    }

    #[test]
    fn finish_reports_the_missing_section() {
        use ParseState::*;
        assert_eq!(Date.finish(), Err(FormatError::MissingToDo));
        assert_eq!(ToDo.finish(), Err(FormatError::MissingDone));
        assert_eq!(Done.finish(), Err(FormatError::NoTasks));
        assert_eq!(Tasks.finish(), Ok(Finished));
        assert_eq!(Finished.finish(), Ok(Finished));
    }

    #[test]
    fn state_names_are_kebab_case() {
        assert_eq!(ParseState::ToDo.as_ref(), "to-do");
        assert_eq!(ParseState::Finished.as_ref(), "finished");
    }

    #[test]
    fn title_line_grammar() {
        assert!(is_title_line("09:30 work,urgent Fix bug"));
        assert!(is_title_line("23:59 a_b-c "));
        assert!(!is_title_line("9:30 work Fix bug"));
        assert!(!is_title_line("09:30 work"));
        assert!(!is_title_line("09:30 w@rk Fix bug"));
        assert!(!is_title_line("- 09:30 work Fix bug"));
    }

    #[test]
    fn scan_sample_entry() {
        let segments = scan(SAMPLE_ENTRY).unwrap();

        let header = segments.header.clone().unwrap();
        assert_eq!(&SAMPLE_ENTRY[header], "March 4, 2024");
        assert_eq!(
            &SAMPLE_ENTRY[segments.to_do.clone()],
            "- Write release notes\n- Reply to infra thread\n\n"
        );
        assert_eq!(&SAMPLE_ENTRY[segments.done.clone()], "- Merge config loader\n");
        assert_eq!(segments.tasks.len(), 3);
        assert!(SAMPLE_ENTRY[segments.tasks[0].clone()].starts_with("09:00 work,review "));
        assert!(SAMPLE_ENTRY[segments.tasks[1].clone()].starts_with("10:15 work "));
        assert_eq!(&SAMPLE_ENTRY[segments.tasks[2].clone()], "12:30 lunch Lunch\n");
    }

    #[test]
    fn scan_handles_crlf() {
        let text = "March 4, 2024\r\n\r\nTo Do\r\n- a\r\nDone\r\n09:00 x Title\r\nbody\r\n";
        let segments = scan(text).unwrap();
        assert_eq!(&text[segments.header.unwrap()], "March 4, 2024");
        assert_eq!(&text[segments.to_do], "- a\r\n");
        assert_eq!(&text[segments.done], "");
        assert_eq!(&text[segments.tasks[0].clone()], "09:00 x Title\r\nbody\r\n");
    }

    #[test]
    fn title_lines_before_done_are_not_tasks() {
        let text = "March 4, 2024\nTo Do\n09:00 x Not a task\nDone\n10:00 x Task\n";
        let segments = scan(text).unwrap();
        assert_eq!(segments.tasks.len(), 1);
        assert_eq!(&text[segments.to_do], "09:00 x Not a task\n");
    }

    #[test]
    fn scan_errors_by_missing_section() {
        assert_eq!(scan(""), Err(FormatError::MissingToDo));
        assert_eq!(scan("March 4, 2024\nDone\nTo Do\n"), Err(FormatError::MissingDone));
        assert_eq!(
            scan("March 4, 2024\nTo Do\n- a\nDone\n- b\n"),
            Err(FormatError::NoTasks)
        );
    }

    #[test]
    fn missing_header_is_left_to_the_caller() {
        let segments = scan("To Do\nDone\n09:00 x Task\n").unwrap();
        assert_eq!(segments.header, None);
    }
}
