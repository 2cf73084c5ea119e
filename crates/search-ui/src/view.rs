//! Render controller state into display rows and notices.
//!
//! The view model is plain data: a front end only has to lay out the rows
//! and print the strings.

use crate::controller::SearchController;
use crate::dto::{FirearmDto, LicenceHolderDto};
use crate::remote::Remote;

/// Indicator shown while a holder search is outstanding.
pub const SEARCHING: &str = "Searching...";
/// Notice for a completed search with no matches.
pub const NO_HOLDERS_FOUND: &str = "No licence holders found";
/// Notice for a failed search.
pub const SEARCH_FAILED: &str = "Search failed";
/// Panel text while a firearm lookup is outstanding.
pub const LOADING_FIREARMS: &str = "Loading firearms...";
/// Panel text for a holder with no firearms.
pub const NO_FIREARMS: &str = "No firearms registered";
/// Panel text for a failed lookup.
pub const LOOKUP_FAILED: &str = "Failed to load firearms";

const SHOW_FIREARMS_HINT: &str = "Click to view firearms";
const HIDE_FIREARMS_HINT: &str = "Hide firearms";
const NOT_RECORDED: &str = "Not recorded";

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label text.
    pub label: &'static str,
    /// Display value.
    pub value: String,
}

fn field(label: &'static str, value: impl Into<String>) -> Field {
    Field {
        label,
        value: value.into(),
    }
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_RECORDED.to_owned(), |v| v.to_string())
}

fn millimetres(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_RECORDED.to_owned(), |v| format!("{v}mm"))
}

/// One firearm inside an expanded panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirearmCard {
    /// "make model".
    pub title: String,
    /// Display fields; notes appear only when present and non-empty.
    pub fields: Vec<Field>,
}

impl From<&FirearmDto> for FirearmCard {
    fn from(firearm: &FirearmDto) -> Self {
        let mut fields = vec![
            field("Serial", firearm.serial_number_raw.as_str()),
            field("Calibre", firearm.calibre.as_str()),
            field("Type", firearm.firearm_type.as_str()),
            field("Action", firearm.action.as_str()),
            field("Barrel", millimetres(firearm.barrel_length_mm)),
            field("Chamber", millimetres(firearm.chamber_size_mm)),
            field("Year", optional(firearm.manufacture_year)),
            field("Condition", firearm.condition.as_str()),
        ];
        if let Some(notes) = firearm.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            fields.push(field("Notes", notes));
        }
        Self {
            title: format!("{} {}", firearm.make, firearm.model),
            fields,
        }
    }
}

/// Contents of an expanded holder's panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirearmPanel {
    /// Lookup outstanding; shows [`LOADING_FIREARMS`].
    Loading,
    /// Lookup returned nothing; shows [`NO_FIREARMS`].
    Empty,
    /// Lookup failed; shows [`LOOKUP_FAILED`].
    Failed,
    /// Lookup returned firearms.
    Listed {
        /// "Firearms (N)".
        heading: String,
        /// One card per firearm, in response order.
        cards: Vec<FirearmCard>,
    },
}

impl FirearmPanel {
    fn from_remote(remote: &Remote<Vec<FirearmDto>>) -> Self {
        match remote {
            Remote::Idle | Remote::Loading => Self::Loading,
            Remote::Failed(_) => Self::Failed,
            Remote::Loaded(firearms) if firearms.is_empty() => Self::Empty,
            Remote::Loaded(firearms) => Self::Listed {
                heading: format!("Firearms ({})", firearms.len()),
                cards: firearms.iter().map(FirearmCard::from).collect(),
            },
        }
    }

    /// Single-line text for the non-list states.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_FIREARMS),
            Self::Empty => Some(NO_FIREARMS),
            Self::Failed => Some(LOOKUP_FAILED),
            Self::Listed { .. } => None,
        }
    }
}

/// One holder in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderRow {
    /// Identifier to pass back on activation.
    pub holder_id: uuid::Uuid,
    /// Full name.
    pub title: String,
    /// Display fields.
    pub fields: Vec<Field>,
    /// "Click to view firearms" or "Hide firearms".
    pub toggle_hint: &'static str,
    /// Present only for the selected holder.
    pub panel: Option<FirearmPanel>,
}

impl HolderRow {
    fn new(holder: &LicenceHolderDto, panel: Option<FirearmPanel>) -> Self {
        let fields = vec![
            field("Licence", holder.licence_number_raw.as_str()),
            field("DOB", holder.dob.to_string()),
            field("Type", holder.licence_type.as_str()),
            field(
                "Valid",
                format!("{} to {}", holder.valid_from, holder.valid_to),
            ),
            field("Email", optional(holder.email.as_deref())),
            field("Phone", optional(holder.phone.as_deref())),
            field("Address", holder.address_line.as_str()),
            field("Town", holder.town.as_str()),
            field("Postcode", holder.postcode.as_str()),
        ];
        let toggle_hint = if panel.is_some() {
            HIDE_FIREARMS_HINT
        } else {
            SHOW_FIREARMS_HINT
        };
        Self {
            holder_id: holder.holder_id,
            title: holder.full_name.clone(),
            fields,
            toggle_hint,
            panel,
        }
    }
}

/// Whole-screen view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    /// The term as typed.
    pub search_term: String,
    /// [`SEARCHING`] while a search is outstanding.
    pub indicator: Option<&'static str>,
    /// Holder rows in response order.
    pub rows: Vec<HolderRow>,
    /// [`NO_HOLDERS_FOUND`] or [`SEARCH_FAILED`] below the list.
    pub notice: Option<&'static str>,
}

impl SearchView {
    /// Render `controller`.
    #[must_use]
    pub fn render(controller: &SearchController) -> Self {
        let selected = controller.selected_holder();
        let rows = controller
            .holders()
            .iter()
            .map(|holder| {
                let panel = (selected == Some(holder.holder_id))
                    .then(|| FirearmPanel::from_remote(controller.firearm_results()));
                HolderRow::new(holder, panel)
            })
            .collect::<Vec<_>>();

        let indicator = controller.is_loading().then_some(SEARCHING);
        let notice = match controller.holder_results() {
            Remote::Failed(_) => Some(SEARCH_FAILED),
            Remote::Loaded(holders)
                if holders.is_empty()
                    && SearchController::is_searchable(controller.search_term()) =>
            {
                Some(NO_HOLDERS_FOUND)
            }
            _ => None,
        };

        Self {
            search_term: controller.search_term().to_owned(),
            indicator,
            rows,
            notice,
        }
    }
}
