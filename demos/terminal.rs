//! Terminal Demo - Lay out a dashboard and draw it with crossterm
//!
//! One cell per layout unit:
//! - Header row with a title and a right-anchored clock box
//! - Sidebar and content area sharing the remaining space
//! - Wrapping tag cloud inside the content area
//!
//! Press any key to quit. Resize the terminal and run again to see the
//! layout follow.
//!
//! Run with: cargo run --example terminal

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use spark_layout::{Behave, Contain, ItemId, LayoutContext, Margins, Rect};

struct Labeled {
    id: ItemId,
    label: &'static str,
}

fn build(ctx: &mut LayoutContext, cols: u16, rows: u16) -> Vec<Labeled> {
    let mut boxes = Vec::new();

    let root = ctx.item_new();
    ctx.set_size_xy(root, f32::from(cols), f32::from(rows));
    ctx.set_contain(root, Contain::COLUMN);

    // Header
    let header = ctx.item_new();
    ctx.insert(root, header);
    ctx.set_size_xy(header, 0.0, 3.0);
    ctx.set_behave(header, Behave::HFILL);
    ctx.set_contain(header, Contain::ROW | Contain::JUSTIFY);
    boxes.push(Labeled { id: header, label: "" });

    for (label, width) in [("spark-layout", 16.0), ("12:00", 9.0)] {
        let id = ctx.item_new();
        ctx.insert(header, id);
        ctx.set_size_xy(id, width, 0.0);
        ctx.set_behave(id, Behave::VFILL);
        ctx.set_margins_ltrb(id, 1.0, 0.0, 1.0, 0.0);
        boxes.push(Labeled { id, label });
    }

    // Body
    let body = ctx.item_new();
    ctx.insert(root, body);
    ctx.set_behave(body, Behave::FILL);
    ctx.set_contain(body, Contain::ROW);

    let sidebar = ctx.item_new();
    ctx.insert(body, sidebar);
    ctx.set_size_xy(sidebar, 20.0, 0.0);
    ctx.set_behave(sidebar, Behave::VFILL);
    boxes.push(Labeled { id: sidebar, label: "sidebar" });

    let content = ctx.item_new();
    ctx.insert(body, content);
    ctx.set_behave(content, Behave::FILL);
    ctx.set_contain(content, Contain::ROW | Contain::WRAP | Contain::START);
    boxes.push(Labeled { id: content, label: "" });

    let tags = [
        "arena", "flex", "wrap", "justify", "anchor", "margins", "squeeze", "fill", "rows",
        "columns", "lines", "rects",
    ];
    for tag in tags {
        let id = ctx.item_new();
        ctx.insert(content, id);
        ctx.set_size_xy(id, tag.len() as f32 + 4.0, 3.0);
        ctx.set_margins(id, Margins::new(1.0, 1.0, 0.0, 0.0));
        boxes.push(Labeled { id, label: tag });
    }

    boxes
}

fn draw(out: &mut impl Write, rect: Rect, label: &str) -> io::Result<()> {
    let x = rect.x.round() as u16;
    let y = rect.y.round() as u16;
    let w = rect.width.round() as u16;
    let h = rect.height.round() as u16;
    if w < 2 || h < 2 {
        return Ok(());
    }

    let inner = usize::from(w - 2);
    queue!(out, MoveTo(x, y), Print(format!("┌{}┐", "─".repeat(inner))))?;
    for row in 1..h - 1 {
        queue!(out, MoveTo(x, y + row), Print("│"), MoveTo(x + w - 1, y + row), Print("│"))?;
    }
    queue!(out, MoveTo(x, y + h - 1), Print(format!("└{}┘", "─".repeat(inner))))?;

    if !label.is_empty() && h > 2 {
        let text: String = label.chars().take(inner).collect();
        queue!(out, MoveTo(x + 1, y + 1), Print(text))?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let (cols, rows) = terminal::size()?;

    let mut ctx = LayoutContext::new();
    let boxes = build(&mut ctx, cols, rows);
    ctx.run_context();

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    queue!(out, EnterAlternateScreen, Hide)?;

    for labeled in &boxes {
        draw(&mut out, ctx.rect(labeled.id), labeled.label)?;
    }
    out.flush()?;

    loop {
        if let Event::Key(_) = event::read()? {
            break;
        }
    }

    queue!(out, Show, LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()
}
