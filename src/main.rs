// What you SEE now:
// • A window with one column of neurons per layer, wired to the next layer.
// • Neuron colors drift every frame (dark gray = weak, blue = strong).
// • ESC or closing the window quits.
// • With --snapshot, no window opens: one frame is rendered and saved as PNG.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use netviz::{
    snapshot, Activations, Canvas, FrameSurface, GraphicsContext, Network, NetworkRenderer,
    Point, Style, VizError, WindowConfig,
};

/// Live neural network diagram
#[derive(Parser, Debug)]
#[command(name = "netviz")]
#[command(about = "Draw a feed-forward network with live activation colors", long_about = None)]
struct Args {
    /// Neurons per layer, left to right (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "4,6,6,2")]
    layers: Vec<usize>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value = "neural network")]
    title: String,

    /// Window position on screen (needs --y too)
    #[arg(long, requires = "y")]
    x: Option<isize>,

    #[arg(long, requires = "x")]
    y: Option<isize>,

    #[arg(long, default_value_t = 30)]
    fps: usize,

    /// Seed for the activation drift (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pixel margin added to every neuron center
    #[arg(long, default_value_t = 0)]
    origin: i32,

    /// Render a single frame to this PNG instead of opening a window
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<(), VizError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let canvas = Canvas::new(args.width, args.height)?;
    let style = Style::default().with_origin(Point::new(args.origin, args.origin));
    let renderer = NetworkRenderer::new(style);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    /* --- Network with random starting activations ---
       Visual: a mix of dim and bright neurons on the first frame. */
    let mut network = Network::from_sizes(&args.layers)?;
    let mut values: Vec<Vec<f64>> = args
        .layers
        .iter()
        .map(|&n| (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    push_values(&mut network, &values)?;

    if let Some(path) = &args.snapshot {
        let mut surface = FrameSurface::new(canvas);
        let layout = renderer.render(&network, &mut surface)?;
        info!(synapses = layout.synapses.len(), "rendered headless frame");
        return snapshot::save_png(surface.frame(), path);
    }

    /* --- Window setup ---
       Visual: window opens and shows the network right away. */
    let mut config = WindowConfig::new(canvas);
    config.title = args.title.clone();
    config.target_fps = args.fps;
    if let (Some(x), Some(y)) = (args.x, args.y) {
        config.position = Some((x, y));
    }
    let mut ctx = GraphicsContext::new(&config)?;

    /* ------------------------------ Main loop ------------------------------ */
    while ctx.is_open() && !ctx.esc_pressed() {
        // Random walk slightly past the domain so clamping shows up too.
        for layer in values.iter_mut() {
            for v in layer.iter_mut() {
                *v = (*v + rng.gen_range(-0.8..0.8_f64)).clamp(-12.0, 12.0);
            }
        }
        push_values(&mut network, &values)?;

        renderer.render(&network, &mut ctx)?;
    }

    Ok(())
}

fn push_values(network: &mut Network, values: &[Vec<f64>]) -> Result<(), VizError> {
    for (i, layer) in values.iter().enumerate() {
        network.set_activations(i, Activations::Raw(layer.clone()))?;
    }
    Ok(())
}
