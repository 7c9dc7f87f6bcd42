//! paneldeck: a multi-page terminal dashboard

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ratatui::layout::Constraint;

use paneldeck_config::{open_with_file, AppConfig};
use paneldeck_taborder::{DriverHandle, FocusTheme, Hotkey, TabOrder, ViewHandle};
use paneldeck_tui::{
    register_panel, DashboardShell, FocusRegistry, FormPanel, Page, RegistryHandle, TablePanel,
    TextPanel, TuiApp,
};

#[derive(Debug, Parser)]
#[command(name = "paneldeck", version, about = "Multi-page terminal dashboard")]
struct Options {
    /// Path to a JSON-C configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let options = Options::parse();

    let level = if options.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &options.config {
        Some(path) => open_with_file(path)?,
        None => {
            tracing::debug!("no configuration file given, using defaults");
            AppConfig::default()
        }
    };

    let (default_border, highlight_border) = config.theme.border_colors()?;
    let theme = FocusTheme::new(default_border, highlight_border);
    let registry: RegistryHandle = Rc::new(RefCell::new(FocusRegistry::new()));

    let mut shell = DashboardShell::new("paneldeck", env!("CARGO_PKG_VERSION"), registry.clone());
    shell.add_page(build_overview_page(&registry, &theme, &config)?);
    shell.add_page(build_ports_page(&registry, &theme, &config)?);
    shell.add_page(build_settings_page(&registry, &theme, &config)?);
    shell.jump_to_page(0);

    let mut app = TuiApp::new(shell, Duration::from_millis(config.tick_interval_ms))?;
    app.run().await?;
    Ok(())
}

fn build_overview_page(
    registry: &RegistryHandle,
    theme: &FocusTheme,
    config: &AppConfig,
) -> Result<Page> {
    let driver: DriverHandle = registry.clone();
    let order = TabOrder::new("Overview", driver, theme.clone());

    let summary = TextPanel::new("Summary");
    summary.set_text(
        "Keys: Tab/Backtab cycle regions, hotkeys jump directly.\n\
         Ctrl+N/Ctrl+P switch pages, F1-F3 jump to a page, q quits.",
    );
    let log = TextPanel::new("Log");
    log.push_line("dashboard started");

    let summary_key = config.region_hotkey("Summary", Hotkey::Char('s'));
    register_panel(registry, &summary);
    register_panel(registry, &log);
    order.add("Summary", summary.clone() as ViewHandle, Some(summary_key))?;
    order.add(
        "Log",
        log.clone() as ViewHandle,
        Some(config.region_hotkey("Log", Hotkey::Char('l'))),
    )?;
    order.finalize_wiring()?;
    order.set_input_focus(summary_key);

    let mut page = Page::new("Overview", order);
    page.add_panel(summary, Constraint::Length(6));
    page.add_panel(log, Constraint::Fill(1));
    Ok(page)
}

fn build_ports_page(
    registry: &RegistryHandle,
    theme: &FocusTheme,
    config: &AppConfig,
) -> Result<Page> {
    let driver: DriverHandle = registry.clone();
    let order = TabOrder::new("Ports", driver, theme.clone());

    let table = TablePanel::new(
        "Ports",
        vec!["Port".into(), "Link".into(), "Rx".into(), "Tx".into()],
    );
    table.set_rows(
        (0..config.port_count)
            .map(|port| {
                vec![
                    port.to_string(),
                    "up".to_string(),
                    "0".to_string(),
                    "0".to_string(),
                ]
            })
            .collect(),
    );
    let detail = TextPanel::new("Detail");
    detail.set_text("Select a port to inspect its counters.");

    let table_key = config.region_hotkey("Ports", Hotkey::Char('p'));
    register_panel(registry, &table);
    register_panel(registry, &detail);
    order.add("Ports", table.clone() as ViewHandle, Some(table_key))?;
    order.add(
        "Detail",
        detail.clone() as ViewHandle,
        Some(config.region_hotkey("Detail", Hotkey::Char('d'))),
    )?;
    order.finalize_wiring()?;
    order.set_input_focus(table_key);

    let mut page = Page::new("Ports", order);
    page.add_panel(table, Constraint::Fill(1));
    page.add_panel(detail, Constraint::Length(5));
    Ok(page)
}

fn build_settings_page(
    registry: &RegistryHandle,
    theme: &FocusTheme,
    config: &AppConfig,
) -> Result<Page> {
    let driver: DriverHandle = registry.clone();
    let order = TabOrder::new("Settings", driver, theme.clone());

    let form = FormPanel::new(
        "Settings",
        vec!["Name".into(), "Refresh (ms)".into(), "Ports".into()],
    );
    let help = TextPanel::new("Help");
    help.set_text("Tab moves between form fields; the form keeps the key.");

    // Plain character hotkeys would swallow letters typed into the form
    // fields, so this page defaults to Ctrl combinations.
    let form_key = config.region_hotkey("Settings", Hotkey::Ctrl('e'));
    register_panel(registry, &form);
    register_panel(registry, &help);
    order.add("Settings", form.clone() as ViewHandle, Some(form_key))?;
    order.add(
        "Help",
        help.clone() as ViewHandle,
        Some(config.region_hotkey("Help", Hotkey::Ctrl('h'))),
    )?;
    order.finalize_wiring()?;
    order.set_input_focus(form_key);

    let mut page = Page::new("Settings", order);
    page.add_panel(form, Constraint::Length(8));
    page.add_panel(help, Constraint::Fill(1));
    Ok(page)
}
