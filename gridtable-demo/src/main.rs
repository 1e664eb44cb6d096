mod input;
mod render;
mod terminal;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use gridtable::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use terminal::TerminalGuard;

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

#[derive(Parser)]
#[command(name = "gridtable-demo", about = "Interactive selectable table")]
struct Args {
    /// Show a large virtualized item list instead of a short static table
    #[arg(long = "virtual")]
    virtualized: bool,

    /// Number of items in virtualized mode
    #[arg(short = 'n', long, default_value = "1000")]
    items: u32,

    /// JSON table configuration (selects, selected, rowHeight, viewportHeight)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(Debug, Clone)]
struct Fruit {
    name: &'static str,
    color: &'static str,
    price: u32,
}

const FRUITS: &[Fruit] = &[
    Fruit { name: "Apple", color: "red", price: 120 },
    Fruit { name: "Banana", color: "yellow", price: 45 },
    Fruit { name: "Cherry", color: "red", price: 600 },
    Fruit { name: "Kiwi", color: "green", price: 80 },
    Fruit { name: "Lemon", color: "yellow", price: 70 },
    Fruit { name: "Plum", color: "purple", price: 150 },
];

fn fruit_rows(fruits: &[Fruit]) -> Vec<TableRow> {
    fruits
        .iter()
        .map(|fruit| {
            TableRow::new(fruit.name.to_lowercase())
                .cell(fruit.name)
                .cell(fruit.color)
                .cell(format!("{}.{:02}", fruit.price / 100, fruit.price % 100))
        })
        .collect()
}

fn load_config(args: &Args) -> Result<TableConfig, DemoError> {
    match &args.config {
        Some(path) => Ok(TableConfig::from_json(&fs::read_to_string(path)?)?),
        None => Ok(TableConfig {
            selects: SelectionMode::Multiple,
            ..TableConfig::default()
        }),
    }
}

fn next_mode(mode: SelectionMode) -> SelectionMode {
    match mode {
        SelectionMode::None => SelectionMode::Single,
        SelectionMode::Single => SelectionMode::Multiple,
        SelectionMode::Multiple => SelectionMode::None,
    }
}

fn describe(event: &ComponentEvent) -> String {
    match &event.detail {
        EventDetail::Selection(ids) => format!("change {ids:?}"),
        EventDetail::Range(range) => format!("{:?} {}..={}", event.kind, range.first, range.last),
        EventDetail::Sort { column, direction } => {
            format!("sort column {} {}", column, direction.as_attr())
        }
    }
}

/// Run the input loop until the user quits.
///
/// `on_sort` lets the caller reorder its data when a sortable column is
/// activated.
fn event_loop<T, F>(term: &mut TerminalGuard, table: &Table<T>, mut on_sort: F) -> Result<(), DemoError>
where
    F: FnMut(&Table<T>, usize, SortDirection, &TableContext) -> Result<(), TableError>,
{
    let cx = TableContext::new();
    let mut status = String::from("q quit, m mode, space toggle, ctrl+a all, tab head");
    let (_, mut height) = term.size()?;
    let mut redraw = true;

    if table.is_virtualized() {
        table.set_viewport_height(height.saturating_sub(render::CHROME_HEIGHT), &cx)?;
    }

    loop {
        if redraw || table.is_dirty() {
            let line = format!(
                "[{}] {} selected | {}",
                table.selects().as_attr().unwrap_or("none"),
                table.selected_count(),
                status
            );
            render::draw(term.stdout(), table, height, &line)?;
            table.clear_dirty();
            redraw = false;
        }

        for event in term.poll(Duration::from_millis(100))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('q')
                        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
                    {
                        return Ok(());
                    }
                    if key.code == KeyCode::Char('m') {
                        table.set_selects(next_mode(table.selects()));
                        continue;
                    }
                    if let Some(combo) = input::convert_key_event(key) {
                        table.on_key(&combo, &cx);
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        table.on_click(mouse.column, mouse.row, &cx);
                    }
                    MouseEventKind::ScrollDown => {
                        table.on_scroll(WHEEL_STEP, &cx);
                    }
                    MouseEventKind::ScrollUp => {
                        table.on_scroll(-WHEEL_STEP, &cx);
                    }
                    _ => {}
                },
                Event::Resize(_, new_height) => {
                    height = new_height;
                    if table.is_virtualized() {
                        table.set_viewport_height(height.saturating_sub(render::CHROME_HEIGHT), &cx)?;
                    }
                    redraw = true;
                }
                _ => {}
            }
        }

        for event in cx.drain_events() {
            log::info!("{}: {}", event.component_id, describe(&event));
            if let EventDetail::Sort { column, direction } = event.detail {
                on_sort(table, column, direction, &cx)?;
            }
            status = describe(&event);
            redraw = true;
        }
    }
}

fn sort_fruits(fruits: &mut [Fruit], column: usize, direction: SortDirection) {
    match column {
        0 => fruits.sort_by_key(|fruit| fruit.name),
        2 => fruits.sort_by_key(|fruit| fruit.price),
        _ => return,
    }
    if direction == SortDirection::Descending {
        fruits.reverse();
    }
}

fn run(args: Args) -> Result<(), DemoError> {
    let config = load_config(&args)?;
    log::info!("starting with {:?}", config);

    let mut term = TerminalGuard::new()?;

    if args.virtualized {
        let table = TableBuilder::virtualized((0..args.items).collect::<Vec<u32>>())
            .item_value(|item, _| format!("item-{item}"))
            .render_item(|item, _| {
                vec![
                    TableCell::new(format!("Item {item}")),
                    TableCell::new(format!("{}", item * 37 % 101)),
                ]
            })
            .config(config)
            .column(TableHeadCell::new("Item").sortable())
            .column(TableHeadCell::new("Score").width(10))
            .build();

        event_loop(&mut term, &table, |table, _, direction, cx| {
            let mut items: Vec<u32> = (0..args.items).collect();
            if direction == SortDirection::Descending {
                items.reverse();
            }
            table.set_items(items, cx)
        })
    } else {
        let mut fruits = FRUITS.to_vec();
        let table = TableBuilder::new()
            .config(config)
            .column(TableHeadCell::new("Name").sortable())
            .column(TableHeadCell::new("Color").width(10))
            .column(TableHeadCell::new("Price").width(8).sortable())
            .rows(fruit_rows(&fruits))
            .build();

        event_loop(&mut term, &table, |table, column, direction, cx| {
            sort_fruits(&mut fruits, column, direction);
            table.set_rows(fruit_rows(&fruits), cx);
            Ok(())
        })
    }
}

fn main() {
    let log_file = File::create("gridtable-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
    }
}
