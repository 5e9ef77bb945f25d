use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use url::Url;

use calendar_embed::api;
use calendar_embed::calendar::CalendarType;
use calendar_embed::config::{AppConfig, Config, LoggedUser, Session};
use calendar_embed::container::{Container, Message, Phase, Task, Ticket};
use calendar_embed::embed::EmbedConfig;
use calendar_embed::layout::{PageLayout, Width};
use calendar_embed::messaging::{Dispatch, FlashKind, Notification};

#[derive(Debug, Clone, Default)]
struct RecordingDispatch {
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl Dispatch for RecordingDispatch {
    fn dispatch(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

struct Host {
    container: Container<RecordingDispatch, Rc<RefCell<PageLayout>>>,
    notifications: Rc<RefCell<Vec<Notification>>>,
    layout: Rc<RefCell<PageLayout>>,
}

fn session(lang: &str) -> Session {
    Session {
        config: Config {
            api_url: Url::parse("https://collab.example.test/api/v2").unwrap(),
            hexcolor: "#255694".to_string(),
            app_config: AppConfig { workspace_id: 7 },
            translation: Default::default(),
        },
        logged_user: LoggedUser {
            lang: lang.to_string(),
        },
        content: serde_json::Value::Null,
    }
}

fn host(lang: &str) -> Host {
    let dispatch = RecordingDispatch::default();
    let notifications = Rc::clone(&dispatch.notifications);
    let layout = Rc::new(RefCell::new(PageLayout::default()));

    Host {
        container: Container::new(session(lang), dispatch, Rc::clone(&layout)),
        notifications,
        layout,
    }
}

fn mount(host: &mut Host) -> Ticket {
    match host.container.update(Message::Mount) {
        Some(Task::FetchCalendarList {
            ticket,
            workspace_id,
        }) => {
            assert_eq!(workspace_id, 7);
            ticket
        }
        other => panic!("Expected a fetch task, got {other:?}"),
    }
}

fn calendar_list_body() -> serde_json::Value {
    json!([
        {
            "calendar_url": "https://caldav.example.test/user/11/",
            "calendar_type": "private",
            "with_credentials": true
        },
        {
            "calendar_url": "https://caldav.example.test/workspace/7/",
            "calendar_type": "shared",
            "with_credentials": false
        },
        {
            "calendar_url": "https://caldav.example.test/workspace/9/",
            "calendar_type": "shared",
            "with_credentials": true
        }
    ])
}

fn ok_response(body: serde_json::Value) -> Result<api::Response, api::Error> {
    Ok(api::Response { status: 200, body })
}

#[test]
fn successful_fetch_renders_the_sandbox() {
    let mut host = host("en");
    let ticket = mount(&mut host);
    assert_eq!(host.container.phase(), Phase::Loading);

    host.container
        .update(Message::CalendarListLoaded(ticket, ok_response(calendar_list_body())));

    assert_eq!(host.container.phase(), Phase::Ready);
    assert_eq!(host.container.calendars().len(), 3);
    assert!(host.notifications.borrow().is_empty());

    let view = host.container.view().expect("sandbox should render");
    let config: serde_json::Value = serde_json::from_str(&view.data_config).unwrap();
    let list = config["globalAccountSettings"]["calendarList"]
        .as_array()
        .unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["settingsAccount"], true);
    assert_eq!(list[1]["settingsAccount"], false);
    assert_eq!(list[2]["settingsAccount"], false);
    assert_eq!(list[0]["hrefLabel"], "User");
    assert_eq!(list[1]["hrefLabel"], "Shared spaces");
    assert_eq!(config["userLang"], "en");
}

#[test]
fn serialized_payload_round_trips() {
    let mut host = host("fr");
    let ticket = mount(&mut host);

    host.container
        .update(Message::CalendarListLoaded(ticket, ok_response(calendar_list_body())));

    let view = host.container.view().unwrap();
    let config: EmbedConfig = serde_json::from_str(&view.data_config).unwrap();

    assert_eq!(serde_json::to_string(&config).unwrap(), view.data_config);
    assert_eq!(config.user_lang, "fr");
    assert_eq!(
        config.global_account_settings.calendar_list[0].href_label,
        "Utilisateur"
    );
}

#[test]
fn client_error_emits_one_localized_notification() {
    let mut host = host("fr");
    let ticket = mount(&mut host);

    host.container.update(Message::CalendarListLoaded(
        ticket,
        Ok(api::Response {
            status: 400,
            body: json!({ "code": 1002 }),
        }),
    ));

    // failure is terminal for this mount cycle, nothing is rendered
    assert_eq!(host.container.phase(), Phase::Loading);
    assert!(host.container.calendars().is_empty());
    assert!(host.container.view().is_none());

    let notifications = host.notifications.borrow();
    assert_eq!(
        *notifications,
        vec![Notification::AddFlashMsg {
            msg: "Erreur lors du chargement de la liste des espaces partagés".to_string(),
            kind: FlashKind::Danger,
        }]
    );
}

#[test]
fn server_error_and_transport_failure_use_the_same_path() {
    for result in [
        Ok(api::Response {
            status: 502,
            body: serde_json::Value::Null,
        }),
        Err(api::Error {
            kind: api::ErrorKind::Http,
            message: "connection refused".to_string(),
        }),
    ] {
        let mut host = host("en");
        let ticket = mount(&mut host);

        host.container
            .update(Message::CalendarListLoaded(ticket, result));

        assert_eq!(host.container.phase(), Phase::Loading);
        assert_eq!(
            *host.notifications.borrow(),
            vec![Notification::AddFlashMsg {
                msg: "Error while loading shared space list".to_string(),
                kind: FlashKind::Danger,
            }]
        );
    }
}

#[test]
fn malformed_success_body_counts_as_failure() {
    let mut host = host("en");
    let ticket = mount(&mut host);

    host.container.update(Message::CalendarListLoaded(
        ticket,
        ok_response(json!([{ "calendar_url": 42 }])),
    ));

    assert_eq!(host.container.phase(), Phase::Loading);
    assert_eq!(host.notifications.borrow().len(), 1);
}

#[test]
fn late_response_after_unmount_is_dropped() {
    let mut host = host("en");
    let ticket = mount(&mut host);

    host.container.update(Message::Unmount);
    host.container
        .update(Message::CalendarListLoaded(ticket, ok_response(calendar_list_body())));

    assert_eq!(host.container.phase(), Phase::Unmounted);
    assert!(host.container.calendars().is_empty());
    assert!(host.container.view().is_none());
    assert!(host.notifications.borrow().is_empty());
}

#[test]
fn late_failure_after_unmount_is_silent() {
    let mut host = host("en");
    let ticket = mount(&mut host);

    host.container.update(Message::Unmount);
    host.container.update(Message::CalendarListLoaded(
        ticket,
        Ok(api::Response {
            status: 400,
            body: json!({ "code": 1002 }),
        }),
    ));

    assert!(host.notifications.borrow().is_empty());
}

#[test]
fn viewport_width_is_restored_on_unmount() {
    let mut host = host("en");

    assert_eq!(host.layout.borrow().width(), Width::Auto);

    mount(&mut host);
    assert_eq!(host.layout.borrow().width(), Width::Full);

    host.container.update(Message::Unmount);
    assert_eq!(host.layout.borrow().width(), Width::Auto);
}

#[test]
fn viewport_width_is_restored_on_drop() {
    let mut host = host("en");

    mount(&mut host);
    assert_eq!(host.layout.borrow().width(), Width::Full);

    let layout = Rc::clone(&host.layout);
    drop(host);

    assert_eq!(layout.borrow().width(), Width::Auto);
}

#[test]
fn single_calendar_types_pick_singular_labels() {
    for (kind, label) in [
        (CalendarType::Private, "User"),
        (CalendarType::Shared, "Shared space"),
    ] {
        let mut host = host("en");
        let ticket = mount(&mut host);
        let calendar_type = match kind {
            CalendarType::Private => "private",
            CalendarType::Shared => "shared",
        };

        host.container.update(Message::CalendarListLoaded(
            ticket,
            ok_response(json!([{
                "calendar_url": "https://caldav.example.test/only/",
                "calendar_type": calendar_type,
                "with_credentials": false
            }])),
        ));

        let view = host.container.view().unwrap();
        let config: serde_json::Value = serde_json::from_str(&view.data_config).unwrap();

        assert_eq!(
            config["globalAccountSettings"]["calendarList"][0]["hrefLabel"],
            label
        );
    }
}

#[test]
fn mount_is_only_valid_once() {
    let mut host = host("en");
    let ticket = mount(&mut host);

    // a second mount must not issue a second fetch
    assert!(host.container.update(Message::Mount).is_none());

    host.container
        .update(Message::CalendarListLoaded(ticket, ok_response(calendar_list_body())));
    assert!(host.container.update(Message::Mount).is_none());
    assert_eq!(host.container.phase(), Phase::Ready);
}
