//! Key handling for the portal shell.
//!
//! While the free-text filter editor is open every key goes to it; otherwise
//! keys map to intent actions. Intents are applied through `App::update`.

use akyljer_client::RecordStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::{App, FilterBar, ListEntity, Route};
use crate::ui::components::FilterInput;

impl App {
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if let Some(input) = self.text_input.as_mut() {
            return match key.code {
                KeyCode::Enter => Some(Action::ApplyTextFilter(input.committed())),
                KeyCode::Esc => {
                    self.text_input = None;
                    None
                }
                _ => {
                    input.handle_key(key);
                    None
                }
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('1') => Some(Action::Navigate(Route::Dashboard)),
            KeyCode::Char('2') => Some(Action::Navigate(Route::Farms)),
            KeyCode::Char('3') => Some(Action::Navigate(Route::Events)),
            KeyCode::Char('4') => Some(Action::Navigate(Route::CropIssues)),
            KeyCode::Tab => Some(Action::NextScreen),
            KeyCode::BackTab => Some(Action::PreviousScreen),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Char('d') => Some(Action::CycleDistrict),
            KeyCode::Char('t') => Some(Action::CycleType),
            KeyCode::Char('s') => Some(Action::CycleStatus),
            KeyCode::Char('v') => Some(Action::CycleSeverity),
            KeyCode::Char('c') => Some(Action::ClearFilters),
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Char('n') => Some(Action::SetSelectedStatus(RecordStatus::New)),
            KeyCode::Char('p') => Some(Action::SetSelectedStatus(RecordStatus::InProgress)),
            KeyCode::Char('x') => Some(Action::SetSelectedStatus(RecordStatus::Resolved)),
            KeyCode::Char('/') => {
                self.open_text_filter();
                None
            }
            KeyCode::Esc => Some(Action::DismissError),
            _ => None,
        }
    }

    fn open_text_filter(&mut self) {
        self.text_input = match self.route {
            Route::Farms => editor_for::<akyljer_client::Farm>(&self.farms.filters),
            Route::CropIssues => editor_for::<akyljer_client::CropIssue>(&self.crop_issues.filters),
            Route::Events | Route::Dashboard => None,
        };
    }
}

fn editor_for<E: ListEntity>(filters: &E::Filters) -> Option<FilterInput> {
    let label = <E::Filters as FilterBar>::TEXT_LABEL?;
    Some(FilterInput::new(label, filters.text()))
}
