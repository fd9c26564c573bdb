//! rasterkit-demo - draw, transform and clip a small scene in the terminal.
//!
//! Reads `<config_dir>/rasterkit/config.yaml` when present. Set `RUST_LOG=debug`
//! to follow the editor's transforms and clipping.

use log::info;
use rasterkit::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config =
        EditorConfig::default_path().map(EditorConfig::load_or_default).unwrap_or_default();
    // One character per cell reads best with a small grid.
    config.canvas.columns = config.canvas.columns.min(72);
    config.canvas.rows = config.canvas.rows.min(36);
    config.canvas.cell_size = 1;
    config.canvas.grid = false;

    let mut editor = Editor::new(&config);
    let background = config.canvas.background;

    editor.draw_shape(ShapeKind::Line, vec![Point::new(2.0, 2.0), Point::new(30.0, 12.0)], None)?;
    editor.draw_shape(ShapeKind::Line, vec![Point::new(2.0, 12.0), Point::new(30.0, 2.0)], None)?;
    editor.draw_shape(ShapeKind::Circle, vec![Point::new(48.0, 10.0)], Some(7.0))?;
    editor.draw_shape(
        ShapeKind::Polygon,
        vec![Point::new(8.0, 20.0), Point::new(26.0, 22.0), Point::new(16.0, 33.0)],
        None,
    )?;
    editor.draw_shape(
        ShapeKind::Polyline,
        vec![Point::new(36.0, 22.0), Point::new(50.0, 32.0), Point::new(64.0, 22.0)],
        None,
    )?;

    let encoder = TerminalEncoder::new().background(background);
    let mut canvas = editor.new_canvas()?;

    // The line algorithm is editor-wide: every line is redrawn with it.
    for command in [Command::UseDda, Command::UseBresenham] {
        editor.run(command)?;
        editor.render(&mut canvas);
        println!("scene ({:?} lines):", editor.line_algorithm());
        encoder.print(&canvas);
    }

    // Translate, scale and rotate the triangle like the T, E and R keys.
    editor.select_at(Point::new(16.0, 25.0));
    for command in [Command::Translate, Command::ScaleUp, Command::RotateClockwise] {
        editor.run(command)?;
    }
    editor.render(&mut canvas);
    println!("triangle after translate, scale and rotate:");
    encoder.print(&canvas);

    editor.clear_selection();
    editor.run(Command::UseLiangBarsky)?;
    let window = ClipRect::new(6.0, 56.0, 4.0, 28.0)?;
    editor.clip_all(&window)?;
    editor.render(&mut canvas);
    canvas.outline_bbox(&window.as_bbox(), Rgba::LIGHT_GRAY);
    println!("clipped to {window:?}:");
    encoder.print(&canvas);

    info!("{} shape(s) remain", editor.shapes().len());
    Ok(())
}
