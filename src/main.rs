use clap::Parser;
use log::info;
use macroquad::prelude::*;
use color_spill::{
    GameState,
    ui::{self, BoardLayout},
    rendering, input,
};

/// Click a tile to clear it and spill its color onto the neighbors.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board width and height in tiles
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(2..=64))]
    size: u64,

    /// Seed for the starting board (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Color Spill".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    // Parse and init before the window exists so --help never opens one.
    let args = Args::parse();
    env_logger::init();

    macroquad::Window::from_config(window_conf(), run(args));
}

async fn run(args: Args) {
    match args.seed {
        Some(seed) => info!("starting with seed {seed}"),
        None => info!("starting with a random board"),
    }
    let mut state = GameState::new(args.size as usize, args.seed);

    loop {
        let mouse_pos = mouse_position();

        // Recreate buttons with current panel position
        let buttons = ui::create_buttons(state.board.size());

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        // Layout comes after size changes so clicks map onto the new board
        let layout = BoardLayout::current(state.board.size());
        input::handle_board_click(&mut state, &layout, mouse_pos);

        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_board(&state.board, &layout);
        rendering::draw_changed_tiles(&state.last_changes, &layout, state.flash_strength());
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
