//! Call screen state: the destination form and the cancel confirmation

use std::sync::Arc;

use domain::WorkflowState;
use tracing::debug;

use crate::error::WorkflowError;
use crate::services::taxi_call_service::TaxiCallService;

/// Pickup address shown on the call screen
pub const DEFAULT_STARTING_ADDRESS: &str = "인천광역시 미추홀구 용현동 292-7";

/// Two-state cancel confirmation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CancelDialog {
    /// No dialog shown
    #[default]
    Idle,
    /// Waiting for the user to confirm or dismiss
    Confirming,
}

impl CancelDialog {
    /// Open the dialog
    pub fn request_cancel(&mut self) {
        *self = Self::Confirming;
    }

    /// Close the dialog, returning whether a cancel was actually confirmed
    pub fn confirm(&mut self) -> bool {
        let confirmed = *self == Self::Confirming;
        *self = Self::Idle;
        confirmed
    }

    /// Close the dialog without cancelling
    pub fn dismiss(&mut self) {
        *self = Self::Idle;
    }

    /// Whether the dialog is open
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Confirming
    }
}

/// Input fields of the call screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallForm {
    /// Read-only pickup label
    pub starting_address: String,
    /// Destination as typed
    pub destination_address: String,
}

impl Default for CallForm {
    fn default() -> Self {
        Self {
            starting_address: DEFAULT_STARTING_ADDRESS.to_string(),
            destination_address: String::new(),
        }
    }
}

/// The call screen: form, cancel dialog, and the workflow controller behind it
#[derive(Debug)]
pub struct CallScreen {
    form: CallForm,
    dialog: CancelDialog,
    service: Arc<TaxiCallService>,
}

impl CallScreen {
    /// Create a screen with an empty destination
    #[must_use]
    pub fn new(service: Arc<TaxiCallService>) -> Self {
        Self {
            form: CallForm::default(),
            dialog: CancelDialog::Idle,
            service,
        }
    }

    /// Override the pickup label
    #[must_use]
    pub fn with_starting_address(mut self, address: impl Into<String>) -> Self {
        self.form.starting_address = address.into();
        self
    }

    /// Current form fields
    #[must_use]
    pub const fn form(&self) -> &CallForm {
        &self.form
    }

    /// Current dialog state
    #[must_use]
    pub const fn dialog(&self) -> CancelDialog {
        self.dialog
    }

    /// The controller driving this screen
    #[must_use]
    pub fn service(&self) -> &Arc<TaxiCallService> {
        &self.service
    }

    /// Latest workflow snapshot
    #[must_use]
    pub fn state(&self) -> WorkflowState {
        self.service.current_state()
    }

    /// Update the destination field
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.form.destination_address = destination.into();
    }

    /// Submit the destination currently in the form
    ///
    /// # Errors
    ///
    /// Propagates the controller's [`WorkflowError`].
    pub async fn submit(&self) -> Result<WorkflowState, WorkflowError> {
        self.service.request_taxi(&self.form.destination_address).await
    }

    /// Ask to cancel; opens the confirmation dialog
    pub fn request_cancel(&mut self) {
        self.dialog.request_cancel();
    }

    /// Confirm the cancel: reset the workflow and clear the destination
    ///
    /// Does nothing unless the dialog is open. Returns whether a reset happened.
    pub fn confirm_cancel(&mut self) -> bool {
        if !self.dialog.confirm() {
            return false;
        }
        self.service.reset();
        self.form.destination_address.clear();
        debug!("Taxi call cancelled");
        true
    }

    /// Dismiss the dialog, leaving everything else untouched
    pub fn dismiss_cancel(&mut self) {
        self.dialog.dismiss();
    }
}
