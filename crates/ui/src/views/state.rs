use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    QuestionFile,
    QuestionRow(usize),
    InvalidSelection,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::Unknown => "Something went wrong. Please try again.".to_string(),
            Self::QuestionFile => "The question file could not be read.".to_string(),
            Self::QuestionRow(row) => {
                format!("The question file has a problem on row {row}.")
            }
            Self::InvalidSelection => "Please pick one of the four options.".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
