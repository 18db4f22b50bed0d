//! Catalog controller
//!
//! Owns the configuration master list, the filtered view, and the current
//! page as explicit state with a defined init/reset lifecycle (the original
//! script kept all three as ambient module globals). Every user-visible
//! operation goes through the presentation port; the controller itself
//! never touches the page.

use crate::inquiry::{InquiryClient, InquiryForm, SubmitOutcome};
use crate::messages;
use crate::throttle::{InteractionTracker, RateLimiter, MIN_INTERACTIONS_DISPLAY};
use ptcat_core::{Configuration, Error, Result};
use ptcat_render::{pagination_controls, product_grid, result_count_label, PresentationPort};
use ptcat_search::{CatalogFilter, Pager};

/// Stateful facade over generation, filtering, pagination, and rendering
#[derive(Debug)]
pub struct CatalogController<P: PresentationPort> {
    port: P,
    master: Vec<Configuration>,
    view: Vec<Configuration>,
    current_page: usize,
    pager: Pager,
    limiter: RateLimiter,
    interactions: InteractionTracker,
}

impl<P: PresentationPort> CatalogController<P> {
    /// Controller with empty lists; call [`init`](Self::init) to populate
    pub fn new(port: P) -> Self {
        CatalogController {
            port,
            master: Vec::new(),
            view: Vec::new(),
            current_page: 1,
            pager: Pager::default(),
            limiter: RateLimiter::default(),
            interactions: InteractionTracker::new(),
        }
    }

    /// Build (or rebuild) the master list and render page 1
    ///
    /// Re-running is an explicit reset: filters are cleared and the view
    /// returns to the full list.
    ///
    /// # Errors
    /// [`Error::Throttled`] when the rate limiter refuses the action; the
    /// throttle banner has already been shown through the port.
    pub fn init(&mut self) -> Result<()> {
        self.checked_attempt()?;

        self.master = ptcat_engine::generate();
        self.view = self.master.clone();
        self.current_page = 1;
        tracing::info!(count = self.master.len(), "catalog initialized");
        self.render_current_page();
        Ok(())
    }

    /// Render the given 1-based page (clamped into range)
    ///
    /// # Errors
    /// [`Error::Throttled`] when the rate limiter refuses the action.
    pub fn display_page(&mut self, page: usize) -> Result<()> {
        self.checked_attempt()?;

        if self.interactions.count() < MIN_INTERACTIONS_DISPLAY {
            tracing::warn!(
                interactions = self.interactions.count(),
                "suspicious activity: very few pointer events"
            );
        }

        self.current_page = self.pager.clamp_page(page, self.view.len());
        self.render_current_page();
        Ok(())
    }

    /// Recompute the view from the master list and render page 1
    ///
    /// # Errors
    /// [`Error::Throttled`] when the rate limiter refuses the action.
    pub fn apply_filter(&mut self, filter: &CatalogFilter) -> Result<()> {
        self.checked_attempt()?;

        self.view = filter.apply(&self.master);
        self.current_page = 1;
        tracing::info!(
            matched = self.view.len(),
            total = self.master.len(),
            "catalog filter applied"
        );
        self.render_current_page();
        Ok(())
    }

    /// Open the inquiry modal for a model code
    pub fn open_inquiry(&mut self, model_code: &str) {
        self.port.open_inquiry(model_code);
    }

    /// Close the inquiry modal
    pub fn close_inquiry(&mut self) {
        self.port.close_inquiry();
    }

    /// Submit an inquiry once and surface the outcome through the port
    ///
    /// Success shows the confirmation banner, closes the modal, and resets
    /// the form. A tripped decoy just closes the modal. Failures show the
    /// retryable error banner; resubmission is up to the user.
    ///
    /// # Errors
    /// Propagates [`Error::SuspectedAutomation`] and
    /// [`Error::SubmissionFailed`] after surfacing them.
    pub async fn submit_inquiry(
        &mut self,
        client: &InquiryClient,
        form: &mut InquiryForm,
    ) -> Result<SubmitOutcome> {
        match client.submit(form, self.interactions.count()).await {
            Ok(SubmitOutcome::Discarded) => {
                self.port.close_inquiry();
                Ok(SubmitOutcome::Discarded)
            }
            Ok(SubmitOutcome::Accepted(receipt)) => {
                self.port.show_confirmation(messages::SUBMISSION_CONFIRMED);
                self.port.close_inquiry();
                form.reset();
                Ok(SubmitOutcome::Accepted(receipt))
            }
            Err(Error::SuspectedAutomation) => {
                self.port.show_error(messages::INTERACT_FIRST);
                Err(Error::SuspectedAutomation)
            }
            Err(err) => {
                self.port.show_error(messages::SUBMISSION_FAILED);
                Err(err)
            }
        }
    }

    /// Record one user pointer event
    pub fn record_interaction(&self) {
        self.interactions.record();
    }

    /// Recorded pointer events
    pub fn interaction_count(&self) -> u32 {
        self.interactions.count()
    }

    /// Size of the master list
    pub fn master_count(&self) -> usize {
        self.master.len()
    }

    /// Size of the current filtered view
    pub fn result_count(&self) -> usize {
        self.view.len()
    }

    /// Current 1-based page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The port, for inspection in tests and for modal forwarding
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the port (confirmation/error surfacing)
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Record an attempt; on refusal show the throttle banner and bail
    fn checked_attempt(&mut self) -> Result<()> {
        if self.limiter.check() {
            return Ok(());
        }
        tracing::warn!("rate limit exceeded, action skipped");
        self.port.show_error(messages::THROTTLED);
        Err(Error::Throttled)
    }

    fn render_current_page(&mut self) {
        let window = self.pager.page(&self.view, self.current_page);
        self.port.replace_grid(&product_grid(window.items));
        self.port.replace_pagination(&pagination_controls(&window));
        self.port
            .set_result_count(&result_count_label(&window));
        self.port.scroll_to_top();
    }
}
