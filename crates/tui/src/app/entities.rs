//! Column and filter descriptors for the three record lists.

use akyljer_client::{
    CropIssue, CropIssueFilters, Event, EventFilters, EventType, Farm, FarmFilters, Labeled,
    ProblemType, RecordStatus, Severity,
};

use crate::action::Action;
use crate::app::list_view::{FilterBar, ListEntity, LoadRequest, StatusEdit};

const NOT_AVAILABLE: &str = "N/A";

fn label_or_all<T: Labeled>(value: Option<T>) -> String {
    value.map_or_else(|| "All".to_string(), |v| v.label().to_string())
}

fn text_or_all(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| "All".to_string(), str::to_string)
}

impl FilterBar for FarmFilters {
    const TEXT_LABEL: Option<&'static str> = Some("Search");

    fn text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    fn set_text(&mut self, value: Option<String>) {
        self.search = value;
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("District", text_or_all(self.district.as_deref())),
            ("Search", text_or_all(self.search.as_deref())),
        ]
    }
}

impl FilterBar for EventFilters {
    fn cycle_type(&mut self) -> bool {
        self.event_type = EventType::cycle(self.event_type);
        true
    }

    fn cycle_status(&mut self) -> bool {
        self.status = RecordStatus::cycle(self.status);
        true
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("District", text_or_all(self.district.as_deref())),
            ("Type", label_or_all(self.event_type)),
            ("Status", label_or_all(self.status)),
        ]
    }
}

impl FilterBar for CropIssueFilters {
    const TEXT_LABEL: Option<&'static str> = Some("Crop type");

    fn text(&self) -> Option<&str> {
        self.crop_type.as_deref()
    }

    fn set_text(&mut self, value: Option<String>) {
        self.crop_type = value;
    }

    fn cycle_type(&mut self) -> bool {
        self.problem_type = ProblemType::cycle(self.problem_type);
        true
    }

    fn cycle_status(&mut self) -> bool {
        self.status = RecordStatus::cycle(self.status);
        true
    }

    fn cycle_severity(&mut self) -> bool {
        self.severity = Severity::cycle(self.severity);
        true
    }

    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("District", text_or_all(self.district.as_deref())),
            ("Crop", text_or_all(self.crop_type.as_deref())),
            ("Problem", label_or_all(self.problem_type)),
            ("Severity", label_or_all(self.severity)),
            ("Status", label_or_all(self.status)),
        ]
    }
}

impl ListEntity for Farm {
    type Filters = FarmFilters;

    const TITLE: &'static str = "Farms";
    const NOUN: &'static str = "farms";
    const HEADERS: &'static [&'static str] = &[
        "Farmer", "Phone", "Village", "District", "Location", "Herds", "Animals",
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        let herds = self.herd_summary();
        vec![
            self.farmer_name.clone(),
            self.phone.clone(),
            self.village.clone(),
            self.district_name.clone(),
            self.location().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            if herds.is_empty() { "-".to_string() } else { herds },
            self.total_animals.to_string(),
        ]
    }

    fn load_action(request: LoadRequest<FarmFilters>) -> Action {
        Action::LoadFarms {
            seq: request.seq,
            filters: request.filters,
            with_districts: request.with_districts,
        }
    }
}

impl ListEntity for Event {
    type Filters = EventFilters;

    const TITLE: &'static str = "Events";
    const NOUN: &'static str = "events";
    const HEADERS: &'static [&'static str] = &[
        "Date", "Farm", "Type", "Disease", "Affected", "Description", "Status",
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.created_at.format("%Y-%m-%d").to_string(),
            format!(
                "{} ({})",
                self.farm_summary.farmer_name, self.farm_summary.village
            ),
            self.event_type.label().to_string(),
            self.disease_suspected
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            self.animals_affected
                .map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string()),
            self.description.clone(),
            self.status.label().to_string(),
        ]
    }

    fn status(&self) -> Option<RecordStatus> {
        Some(self.status)
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn is_status_editable(&self) -> bool {
        self.event_type.is_status_editable()
    }

    fn load_action(request: LoadRequest<EventFilters>) -> Action {
        Action::LoadEvents {
            seq: request.seq,
            filters: request.filters,
            with_districts: request.with_districts,
        }
    }

    fn update_action(edit: StatusEdit) -> Option<Action> {
        Some(Action::UpdateEventStatus {
            id: edit.id,
            status: edit.status,
            previous: edit.previous,
        })
    }
}

impl ListEntity for CropIssue {
    type Filters = CropIssueFilters;

    const TITLE: &'static str = "Crop Issues";
    const NOUN: &'static str = "crop issues";
    const HEADERS: &'static [&'static str] = &[
        "Title", "Farm", "Crop", "Problem", "Severity", "Area (ha)", "Status",
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            format!(
                "{} ({})",
                self.farm_summary.farmer_name, self.farm_summary.district_name
            ),
            self.crop_type.clone(),
            self.problem_type.label().to_string(),
            self.severity.label().to_string(),
            self.area_affected_ha
                .map_or_else(|| NOT_AVAILABLE.to_string(), |a| format!("{a:.2}")),
            self.status.label().to_string(),
        ]
    }

    fn status(&self) -> Option<RecordStatus> {
        Some(self.status)
    }

    fn set_status(&mut self, status: RecordStatus) {
        self.status = status;
    }

    fn is_status_editable(&self) -> bool {
        true
    }

    fn load_action(request: LoadRequest<CropIssueFilters>) -> Action {
        Action::LoadCropIssues {
            seq: request.seq,
            filters: request.filters,
            with_districts: request.with_districts,
        }
    }

    fn update_action(edit: StatusEdit) -> Option<Action> {
        Some(Action::UpdateCropIssueStatus {
            id: edit.id,
            status: edit.status,
            previous: edit.previous,
        })
    }
}
