use crate::calendar::{Calendar, ErrorBody};
use crate::config::Session;
use crate::embed::{EmbedConfig, EmbedView, EMBED_SRC};
use crate::layout::{ViewportLayout, Width};
use crate::messaging::{Command, Dispatch, FlashKind, Notification};
use crate::{api, i18n};

/// Lifecycle of the embedded calendar container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    /// Mounted, calendar list fetch outstanding or failed.
    Loading,
    /// Mounted, calendar list available, sandbox rendered.
    Ready,
    Unmounted,
}

/// Correlates a fetch completion with the mount cycle that issued it.
/// Completions whose ticket no longer matches are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

#[derive(Debug)]
pub enum Message {
    Mount,
    CalendarListLoaded(Ticket, Result<api::Response, api::Error>),
    Unmount,
}

/// Work the host has to run on behalf of the container. The container
/// performs no I/O itself; it hands out tasks and consumes the completion
/// messages the host feeds back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    FetchCalendarList { ticket: Ticket, workspace_id: u32 },
}

/// Embedded calendar container.
///
/// Mounts a sandboxed calendar view, supplies it with per-user and
/// per-workspace configuration derived from one calendar list fetch, and
/// restores the viewport on teardown.
pub struct Container<D: Dispatch, L: ViewportLayout> {
    session: Session,
    i18n: i18n::Registry,
    dispatch: D,
    layout: L,

    phase: Phase,
    calendars: Vec<Calendar>,
    epoch: u64,
    prior_width: Option<Width>,
}

impl<D: Dispatch, L: ViewportLayout> Container<D, L> {
    pub fn new(session: Session, dispatch: D, layout: L) -> Self {
        let mut registry = i18n::Registry::new();
        registry.add_resources(&session.config.translation);
        registry.set_language(&session.logged_user.lang);

        log::debug!(hexcolor = session.config.hexcolor.as_str(); "Calendar container initializing");

        Self {
            session,
            i18n: registry,
            dispatch,
            layout,
            phase: Phase::Initializing,
            calendars: Vec::new(),
            epoch: 0,
            prior_width: None,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn calendars(&self) -> &[Calendar] {
        &self.calendars
    }

    /// Handle an inter-widget command. The recognized set is empty, so
    /// this is currently unreachable; the match stays exhaustive as
    /// variants get added.
    pub fn dispatch_command(&mut self, command: Command) {
        match command {}
    }

    pub fn update(&mut self, message: Message) -> Option<Task> {
        match message {
            Message::Mount => self.mount(),
            Message::CalendarListLoaded(ticket, result) => {
                self.calendar_list_loaded(ticket, result);

                None
            }
            Message::Unmount => {
                self.unmount();

                None
            }
        }
    }

    /// Render the sandboxed view. `None` until the calendar list arrived,
    /// and again after unmount.
    pub fn view(&self) -> Option<EmbedView> {
        if self.phase != Phase::Ready {
            return None;
        }

        let config = EmbedConfig::project(&self.calendars, &self.i18n);

        match serde_json::to_string(&config) {
            Ok(data_config) => Some(EmbedView {
                src: EMBED_SRC,
                data_config,
            }),
            Err(error) => {
                log::error!("Failed to serialize embed configuration: {error}");

                None
            }
        }
    }

    fn mount(&mut self) -> Option<Task> {
        if self.phase != Phase::Initializing {
            log::warn!("Ignoring mount in phase {:?}", self.phase);

            return None;
        }

        self.prior_width = Some(self.layout.set_width(Width::Full));
        self.phase = Phase::Loading;

        log::debug!(hexcolor = self.session.config.hexcolor.as_str(); "Calendar container mounted");

        Some(Task::FetchCalendarList {
            ticket: Ticket { epoch: self.epoch },
            workspace_id: self.session.config.app_config.workspace_id,
        })
    }

    fn calendar_list_loaded(&mut self, ticket: Ticket, result: Result<api::Response, api::Error>) {
        // Liveness check: the container may have been torn down (or the
        // phase left behind) while the fetch was outstanding.
        if self.phase != Phase::Loading || ticket.epoch != self.epoch {
            log::debug!("Discarding stale calendar list response");

            return;
        }

        match result {
            Ok(response) if response.status == 200 => {
                match serde_json::from_value::<Vec<Calendar>>(response.body) {
                    Ok(calendars) => {
                        log::info!("Fetched calendar list: {} calendars", calendars.len());

                        self.calendars = calendars;
                        self.phase = Phase::Ready;
                    }
                    Err(error) => {
                        log::error!("Malformed calendar list body: {error}");

                        self.fail();
                    }
                }
            }
            Ok(response) if (400..500).contains(&response.status) => {
                // The body carries an error code, but every code maps to
                // the same generic notification.
                match serde_json::from_value::<ErrorBody>(response.body) {
                    Ok(body) => log::error!(
                        status = response.status, code = body.code;
                        "Calendar list request rejected"
                    ),
                    Err(_) => log::error!(
                        status = response.status;
                        "Calendar list request rejected with malformed body"
                    ),
                }

                self.fail();
            }
            Ok(response) => {
                log::error!(status = response.status; "Unexpected calendar list response");

                self.fail();
            }
            Err(error) => {
                log::error!("Calendar list request failed: {error}");

                self.fail();
            }
        }
    }

    fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }

        self.release_layout();
        self.phase = Phase::Unmounted;
        // Any still-outstanding fetch resolves against an older epoch and
        // is dropped on arrival.
        self.epoch += 1;

        log::debug!(hexcolor = self.session.config.hexcolor.as_str(); "Calendar container unmounted");
    }

    fn fail(&mut self) {
        self.dispatch.dispatch(Notification::AddFlashMsg {
            msg: self.i18n.t("Error while loading shared space list"),
            kind: FlashKind::Danger,
        });
    }

    fn release_layout(&mut self) {
        if let Some(width) = self.prior_width.take() {
            self.layout.set_width(width);
        }
    }
}

impl<D: Dispatch, L: ViewportLayout> Drop for Container<D, L> {
    fn drop(&mut self) {
        // Width override release is guaranteed on all exit paths, not only
        // through an explicit unmount.
        self.release_layout();
    }
}
