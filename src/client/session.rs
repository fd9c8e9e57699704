use tracing::{debug, info, warn};

use super::{
    client_error::{ClientError, SubmitError},
    midpoint_client::MidpointBackend,
    place_category::PlaceCategory,
    place_panel::{DirectionOrigins, Panel, PlaceDetail},
    render::{render, Scene},
};
use crate::types::midpoint::{FindMidpointRequest, MidpointResult, Place};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSlot {
    First,
    Second,
}

/// An autocomplete pick, as delivered by the suggestion widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestion {
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressField {
    pub text: String,
    /// Id of the last selected suggestion, empty if none was picked.
    pub place_id: String,
}

/// A request that passed local validation, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub seq: u64,
    pub request: FindMidpointRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Failed,
    /// A newer submission was issued; the outcome was dropped.
    Stale,
}

/// State of one search screen. Every field is written only through the
/// methods below.
#[derive(Debug, Default)]
pub struct Session {
    address1: AddressField,
    address2: AddressField,
    place_type: PlaceCategory,
    issued: u64,
    scene: Option<Scene>,
    places: Vec<Place>,
    origins: DirectionOrigins,
    panel: Panel,
    notice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self, slot: AddressSlot) -> &AddressField {
        match slot {
            AddressSlot::First => &self.address1,
            AddressSlot::Second => &self.address2,
        }
    }

    fn address_mut(&mut self, slot: AddressSlot) -> &mut AddressField {
        match slot {
            AddressSlot::First => &mut self.address1,
            AddressSlot::Second => &mut self.address2,
        }
    }

    pub fn select_suggestion(&mut self, slot: AddressSlot, suggestion: &Suggestion) {
        let field = self.address_mut(slot);

        field.place_id = suggestion.id.clone().unwrap_or_default();
        if let Some(name) = &suggestion.display_name {
            field.text = name.clone();
        }
    }

    /// Free-text edit. The selected place id is kept even if the text no
    /// longer matches it.
    pub fn edit_address(&mut self, slot: AddressSlot, text: &str) {
        self.address_mut(slot).text = text.to_string();
    }

    pub fn set_place_type(&mut self, place_type: PlaceCategory) {
        self.place_type = place_type;
    }

    pub fn place_type(&self) -> PlaceCategory {
        self.place_type
    }

    pub fn begin_submission(&mut self) -> Result<Submission, SubmitError> {
        let address1 = self.address1.text.trim();
        let address2 = self.address2.text.trim();

        if address1.is_empty() || address2.is_empty() {
            let err = SubmitError::MissingAddress;
            self.notice = Some(err.user_message().to_string());
            return Err(err);
        }

        let request = FindMidpointRequest {
            address1: address1.to_string(),
            address2: address2.to_string(),
            place_type: self.place_type.as_str().to_string(),
            place_id1: self.address1.place_id.clone(),
            place_id2: self.address2.place_id.clone(),
        };

        self.issued += 1;
        self.notice = None;
        debug!("Issuing submission {}", self.issued);

        Ok(Submission {
            seq: self.issued,
            request,
        })
    }

    pub fn apply_outcome(
        &mut self,
        submission: &Submission,
        outcome: Result<MidpointResult, ClientError>,
    ) -> Applied {
        if submission.seq != self.issued {
            info!(
                "Dropping outcome of submission {}, latest is {}",
                submission.seq, self.issued
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(result) => {
                self.scene = Some(render(&result));
                self.places = result.places;
                self.origins = DirectionOrigins {
                    address1: submission.request.address1.clone(),
                    address2: submission.request.address2.clone(),
                };
                self.panel = Panel::Hidden;
                Applied::Rendered
            }
            Err(e) => {
                warn!("Submission {} failed: {}", submission.seq, e);
                self.notice = Some(e.user_message().to_string());
                Applied::Failed
            }
        }
    }

    /// One attempt: validate, send, apply.
    pub async fn submit<B>(&mut self, backend: &B) -> Result<Applied, SubmitError>
    where
        B: MidpointBackend + ?Sized,
    {
        let submission = self.begin_submission()?;
        let outcome = backend.find_midpoint(&submission.request).await;

        Ok(self.apply_outcome(&submission, outcome))
    }

    pub fn open_place(&mut self, index: usize) -> Option<&PlaceDetail> {
        let detail = PlaceDetail::new(self.places.get(index)?, &self.origins);
        self.panel = Panel::Visible(detail);

        match &self.panel {
            Panel::Visible(detail) => Some(detail),
            Panel::Hidden => None,
        }
    }

    /// Only place markers open the panel.
    pub fn open_marker(&mut self, marker_index: usize) -> Option<&PlaceDetail> {
        let place_index = self
            .scene
            .as_ref()?
            .markers
            .get(marker_index)?
            .place_index?;

        self.open_place(place_index)
    }

    pub fn close_panel(&mut self) {
        self.panel = Panel::Hidden;
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
