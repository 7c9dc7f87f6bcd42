//! Dashboard shell behavior: page switching, quitting, key routing

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Constraint;
use ratatui::style::Color;

use paneldeck_taborder::{DriverHandle, FocusTheme, Hotkey, TabOrder, ViewHandle};
use paneldeck_tui::{
    register_panel, DashboardShell, FocusRegistry, FormPanel, Page, RegistryHandle, TextPanel,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

struct Fixture {
    shell: DashboardShell,
    summary: Rc<TextPanel>,
    log: Rc<TextPanel>,
    form: Rc<FormPanel>,
}

/// Two pages: a text page (Summary + Log) and a form page.
fn dashboard() -> Fixture {
    let theme = FocusTheme::new(Color::Green, Color::Blue);
    let registry: RegistryHandle = Rc::new(RefCell::new(FocusRegistry::new()));
    let mut shell = DashboardShell::new("test", "0.0.0", registry.clone());

    let summary = TextPanel::new("Summary");
    let log = TextPanel::new("Log");
    let driver: DriverHandle = registry.clone();
    let order = TabOrder::new("Main", driver, theme.clone());
    register_panel(&registry, &summary);
    register_panel(&registry, &log);
    order
        .add("Summary", summary.clone() as ViewHandle, Some(Hotkey::Char('s')))
        .unwrap();
    order
        .add("Log", log.clone() as ViewHandle, Some(Hotkey::Char('l')))
        .unwrap();
    order.finalize_wiring().unwrap();
    order.set_input_focus(Hotkey::Char('s'));
    let mut main_page = Page::new("Main", order);
    main_page.add_panel(summary.clone(), Constraint::Length(5));
    main_page.add_panel(log.clone(), Constraint::Fill(1));
    shell.add_page(main_page);

    let form = FormPanel::new("Settings", vec!["Name".into()]);
    let driver: DriverHandle = registry.clone();
    let order = TabOrder::new("Settings", driver, theme);
    register_panel(&registry, &form);
    order
        .add("Settings", form.clone() as ViewHandle, Some(Hotkey::Ctrl('e')))
        .unwrap();
    order.finalize_wiring().unwrap();
    order.set_input_focus(Hotkey::Ctrl('e'));
    let mut form_page = Page::new("Settings", order);
    form_page.add_panel(form.clone(), Constraint::Fill(1));
    shell.add_page(form_page);
    shell.jump_to_page(0);

    Fixture {
        shell,
        summary,
        log,
        form,
    }
}

#[test]
fn ctrl_n_and_ctrl_p_cycle_pages_with_wraparound() {
    let mut fx = dashboard();
    assert_eq!(fx.shell.current_page(), 0);

    assert!(!fx.shell.handle_key(ctrl('n')));
    assert_eq!(fx.shell.current_page(), 1);
    assert!(!fx.shell.handle_key(ctrl('n')));
    assert_eq!(fx.shell.current_page(), 0);

    assert!(!fx.shell.handle_key(ctrl('p')));
    assert_eq!(fx.shell.current_page(), 1);
}

#[test]
fn function_keys_jump_to_pages() {
    let mut fx = dashboard();
    assert!(!fx.shell.handle_key(key(KeyCode::F(2))));
    assert_eq!(fx.shell.current_page(), 1);
    assert!(!fx.shell.handle_key(key(KeyCode::F(1))));
    assert_eq!(fx.shell.current_page(), 0);

    // F-key past the last page is ignored
    assert!(!fx.shell.handle_key(key(KeyCode::F(9))));
    assert_eq!(fx.shell.current_page(), 0);
}

#[test]
fn q_and_ctrl_q_request_quit() {
    let mut fx = dashboard();
    assert!(fx.shell.handle_key(key(KeyCode::Char('q'))));
    assert!(fx.shell.handle_key(ctrl('q')));
}

#[test]
fn keys_route_to_the_focused_widget() {
    let mut fx = dashboard();
    fx.summary.set_text("a\nb\nc");

    // Summary owns focus; Down scrolls it, not the log
    fx.shell.handle_key(key(KeyCode::Down));
    assert_eq!(fx.summary.scroll_offset(), 1);
    assert_eq!(fx.log.scroll_offset(), 0);
}

#[test]
fn tab_moves_focus_between_regions_through_the_shell() {
    let mut fx = dashboard();
    assert_eq!(fx.summary.border_color(), Color::Blue);
    assert_eq!(fx.log.border_color(), Color::Green);

    fx.shell.handle_key(key(KeyCode::Tab));
    assert_eq!(fx.summary.border_color(), Color::Green);
    assert_eq!(fx.log.border_color(), Color::Blue);

    // Now the log owns input
    fx.log.set_text("x\ny");
    fx.shell.handle_key(key(KeyCode::Down));
    assert_eq!(fx.log.scroll_offset(), 1);
}

#[test]
fn switching_pages_reapplies_that_pages_focus() {
    let mut fx = dashboard();
    fx.shell.handle_key(ctrl('n'));
    assert_eq!(fx.form.border_color(), Color::Blue);

    // Typing lands in the form after the switch
    fx.shell.handle_key(key(KeyCode::Char('a')));
    assert_eq!(fx.form.value("Name").unwrap(), "a");

    fx.shell.handle_key(ctrl('p'));
    assert_eq!(fx.summary.border_color(), Color::Blue);
    fx.summary.set_text("1\n2");
    fx.shell.handle_key(key(KeyCode::Down));
    assert_eq!(fx.summary.scroll_offset(), 1);
}

#[test]
fn hotkey_typed_at_the_shell_switches_regions() {
    let mut fx = dashboard();
    fx.shell.handle_key(key(KeyCode::Char('l')));
    assert_eq!(fx.log.border_color(), Color::Blue);
    assert_eq!(fx.summary.border_color(), Color::Green);
}
