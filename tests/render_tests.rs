//! Render tests over an in-memory terminal.

use qjoin::components::{Component, JoinForm, JoinFormProps, TicketView, TicketViewProps};
use qjoin::dispatch::testing::RenderHarness;
use qjoin::state::{AppState, Ticket, ViewState};
use qjoin::ui::AppUi;

fn render_form(state: &AppState) -> String {
    let mut harness = RenderHarness::new(60, 20);
    let mut form = JoinForm::new();
    harness.render_to_string_plain(|frame| {
        form.render(
            frame,
            frame.area(),
            JoinFormProps {
                state,
                is_focused: true,
            },
        );
    })
}

#[test]
fn initial_form_shows_labels_and_placeholders() {
    let output = render_form(&AppState::new());

    assert!(output.contains("Join Queue"), "should show title");
    assert!(output.contains("Business Name"), "should show business label");
    assert!(output.contains("Queue ID"), "should show queue label");
    assert!(
        output.contains("Enter business name"),
        "should show business placeholder"
    );
    assert!(
        output.contains("Enter queue ID"),
        "should show queue placeholder"
    );
}

#[test]
fn form_shows_typed_values() {
    let mut state = AppState::new();
    state.join.business_name = "Joe's Diner".into();
    state.join.queue_id = "Q42".into();

    let output = render_form(&state);

    assert!(output.contains("Joe's Diner"));
    assert!(output.contains("Q42"));
}

#[test]
fn form_shows_position_source_error() {
    let mut state = AppState::new();
    state.join_error = Some("Position assignment unavailable".into());

    let output = render_form(&state);

    assert!(output.contains("Position assignment unavailable"));
}

#[test]
fn form_help_bar_shows_key_hints() {
    let output = render_form(&AppState::new());

    assert!(output.contains("field"), "should show field hint");
    assert!(output.contains("join"), "should show join hint");
    assert!(output.contains("quit"), "should show quit hint");
}

#[test]
fn ticket_view_shows_fields_in_fixed_order() {
    let mut harness = RenderHarness::new(60, 20);
    let mut view = TicketView::default();
    let ticket = Ticket {
        queue_id: "Q42".into(),
        business_name: "Joe's Diner".into(),
        position: 7,
    };

    let output = harness.render_to_string_plain(|frame| {
        view.render(
            frame,
            frame.area(),
            TicketViewProps {
                ticket: &ticket,
                is_focused: true,
            },
        );
    });

    assert!(output.contains("Queue Ticket"), "should show title");
    assert!(output.contains("Q42"));
    assert!(output.contains("Joe's Diner"));
    assert!(output.contains("7"));
    assert!(output.contains("Close"), "should show close hint");

    // Label ordering: Queue ID, Business, Position.
    let queue = output.find("Queue ID:").expect("queue label");
    let business = output.find("Business:").expect("business label");
    let position = output.find("Your Position:").expect("position label");
    assert!(queue < business && business < position, "labels out of order");
}

#[test]
fn ticket_modal_renders_over_the_form() {
    let mut harness = RenderHarness::new(60, 20);
    let mut ui = AppUi::new();

    let mut state = AppState::new();
    state.view = ViewState::Ticket;
    state.ticket = Some(Ticket {
        queue_id: "Q42".into(),
        business_name: "Joe's Diner".into(),
        position: 7,
    });

    let output = harness.render_to_string_plain(|frame| {
        ui.render(frame, frame.area(), &state);
    });

    assert!(output.contains("Queue Ticket"));
}

#[test]
fn submit_control_reads_joined_while_ticket_shown() {
    let mut state = AppState::new();
    state.view = ViewState::Ticket;
    state.ticket = Some(Ticket {
        queue_id: "Q42".into(),
        business_name: "Joe's Diner".into(),
        position: 7,
    });

    let output = render_form(&state);

    assert!(output.contains("Joined!"));
}

#[test]
fn ticket_view_skips_tiny_terminals() {
    let mut harness = RenderHarness::new(20, 6);
    let mut view = TicketView::default();
    let ticket = Ticket {
        queue_id: "Q42".into(),
        business_name: "Joe's Diner".into(),
        position: 7,
    };

    // Must not panic on an area too small for the modal.
    let output = harness.render_to_string_plain(|frame| {
        view.render(
            frame,
            frame.area(),
            TicketViewProps {
                ticket: &ticket,
                is_focused: true,
            },
        );
    });

    assert!(!output.contains("Queue Ticket"));
}
