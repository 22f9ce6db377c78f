use log::{debug, info};
use shared::{Profile, ProfileDetails, RecordId};

use super::catalog;
use super::ids::IdGenerator;
use super::notifications::Notice;
use crate::config::PortalVariant;
use crate::storage::{KeyValueStore, RecordStore, StoreError};

/// Form values for a profile being created or edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub details: ProfileDetails,
    pub notes: String,
}

impl ProfileDraft {
    pub fn blank(variant: PortalVariant) -> Self {
        Self {
            name: String::new(),
            details: catalog::blank_details(variant),
            notes: String::new(),
        }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            details: profile.details.clone(),
            notes: profile.notes.clone(),
        }
    }

    fn into_profile(self, id: RecordId) -> Profile {
        Profile {
            id,
            name: self.name.trim().to_string(),
            details: self.details,
            notes: self.notes,
        }
    }
}

/// Create/edit/delete flow for customer profiles.
///
/// The draft is only written to the collection on [`save`](Self::save);
/// the edit marker decides whether that replaces an existing profile or
/// prepends a new one.
#[derive(Debug)]
pub struct ProfileWorkflow {
    variant: PortalVariant,
    draft: ProfileDraft,
    editing: Option<RecordId>,
    open: bool,
}

impl ProfileWorkflow {
    pub fn new(variant: PortalVariant) -> Self {
        Self {
            variant,
            draft: ProfileDraft::blank(variant),
            editing: None,
            open: false,
        }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Id of the profile being edited, if any
    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    /// Whether the edit surface is showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_for_create(&mut self) {
        self.draft = ProfileDraft::blank(self.variant);
        self.editing = None;
        self.open = true;
    }

    pub fn open_for_edit(&mut self, profile: &Profile) {
        debug!("Editing profile {}", profile.id);
        self.draft = ProfileDraft::from_profile(profile);
        self.editing = Some(profile.id);
        self.open = true;
    }

    /// Hide the edit surface, keeping nothing
    pub fn close(&mut self) {
        self.reset();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// Set the dental concern; values outside the fixed list are refused
    pub fn set_concern(&mut self, value: &str) -> bool {
        match &mut self.draft.details {
            ProfileDetails::Patient { concern } if value.is_empty() || catalog::is_known_concern(value) => {
                *concern = value.to_string();
                true
            }
            _ => false,
        }
    }

    /// Set the pet breed (free text)
    pub fn set_breed(&mut self, value: impl Into<String>) -> bool {
        match &mut self.draft.details {
            ProfileDetails::Pet { breed } => {
                *breed = value.into();
                true
            }
            ProfileDetails::Patient { .. } => false,
        }
    }

    /// Whether the save action should be enabled
    pub fn can_save(&self) -> bool {
        !self.draft.name.trim().is_empty()
    }

    /// Write the draft into `profiles` and persist the whole collection.
    ///
    /// Empty names are a no-op. Saving an edit whose profile has since been
    /// deleted closes the form and changes nothing.
    pub fn save<S: KeyValueStore>(
        &mut self,
        profiles: &mut Vec<Profile>,
        store: &RecordStore<S>,
        ids: &mut IdGenerator,
        now_millis: u64,
    ) -> Result<Option<Notice>, StoreError> {
        if !self.can_save() {
            return Ok(None);
        }

        let draft = std::mem::replace(&mut self.draft, ProfileDraft::blank(self.variant));
        let editing = self.editing.take();
        self.open = false;

        let notice = match editing {
            Some(id) => {
                let Some(slot) = profiles.iter_mut().find(|p| p.id == id) else {
                    info!("Profile {} vanished before saving; nothing to update", id);
                    return Ok(None);
                };
                *slot = draft.into_profile(id);
                info!("Updated profile {}", id);
                Notice::ProfileUpdated
            }
            None => {
                let profile = draft.into_profile(ids.next(now_millis));
                info!("Added profile {} (id {})", profile.name, profile.id);
                let notice = Notice::ProfileAdded(profile.name.clone());
                profiles.insert(0, profile);
                notice
            }
        };

        store.save(profiles.as_slice())?;
        Ok(Some(notice))
    }

    /// Remove a profile; removing an unknown id changes nothing and says nothing
    pub fn delete<S: KeyValueStore>(
        &mut self,
        profiles: &mut Vec<Profile>,
        store: &RecordStore<S>,
        id: RecordId,
    ) -> Result<Option<Notice>, StoreError> {
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        if profiles.len() == before {
            debug!("Delete of unknown profile {} ignored", id);
            return Ok(None);
        }
        if self.editing == Some(id) {
            self.reset();
        }
        store.save(profiles.as_slice())?;
        info!("Deleted profile {}", id);
        Ok(Some(Notice::ProfileRemoved))
    }

    fn reset(&mut self) {
        self.draft = ProfileDraft::blank(self.variant);
        self.editing = None;
        self.open = false;
    }
}
