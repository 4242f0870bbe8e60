//! End-to-end frames drawn into the software surface.

use netviz::surface::blend_over;
use netviz::{
    Activations, Canvas, Color, FrameSurface, Layer, Network, NetworkRenderer, Point, Style,
    Surface, VizError,
};

fn midrange_network() -> Network {
    Network::new(vec![
        Layer::raw(vec![0.04; 2]).unwrap(),
        Layer::raw(vec![0.04; 3]).unwrap(),
        Layer::raw(vec![0.04; 1]).unwrap(),
    ])
    .unwrap()
}

fn render(network: &Network, style: Style, w: u32, h: u32) -> FrameSurface {
    let mut surface = FrameSurface::new(Canvas::new(w, h).unwrap());
    NetworkRenderer::new(style).render(network, &mut surface).unwrap();
    surface
}

#[test]
fn reference_frame_colors() {
    let surface = render(&midrange_network(), Style::default(), 300, 150);
    let frame = surface.frame();
    let mid = Color::rgb(10, 10, 138).to_rgb_u32();

    for center in [(50, 37), (50, 112), (150, 25), (150, 75), (150, 125), (250, 75)] {
        assert_eq!(frame.pixel(Point::new(center.0, center.1)), Some(mid), "{center:?}");
    }
    // bottom-left corner lies outside every circle and line
    assert_eq!(frame.pixel(Point::new(0, 149)), Some(Style::BACKGROUND.to_rgb_u32()));
    assert_eq!(surface.presented(), 1);
}

#[test]
fn synapse_blends_over_background() {
    let net = Network::from_sizes(&[1, 1]).unwrap();
    let style = Style::default().with_radius_budget(0);
    let frame = render(&net, style, 100, 10).into_frame();

    let line = blend_over(Style::BACKGROUND.to_rgb_u32(), Style::SYNAPSE);
    assert_eq!(frame.pixel(Point::new(50, 5)), Some(line));
    assert_eq!(frame.pixel(Point::new(50, 4)), Some(Style::BACKGROUND.to_rgb_u32()));
    // radius 1 disc at the left neuron: a plus shape
    let mid = Color::rgb(10, 10, 138).to_rgb_u32();
    for (x, y) in [(25, 5), (24, 5), (26, 5), (25, 4), (25, 6)] {
        assert_eq!(frame.pixel(Point::new(x, y)), Some(mid), "({x},{y})");
    }
    assert_eq!(frame.pixel(Point::new(24, 4)), Some(Style::BACKGROUND.to_rgb_u32()));
}

#[test]
fn identical_inputs_give_identical_frames() {
    let net = midrange_network();
    let a = render(&net, Style::default(), 320, 200).into_frame();
    let b = render(&net, Style::default(), 320, 200).into_frame();
    assert_eq!(a, b);
}

#[test]
fn activations_changed_between_frames_show_up() {
    let mut net = Network::from_sizes(&[1]).unwrap();
    let renderer = NetworkRenderer::default();
    let mut surface = FrameSurface::new(Canvas::new(40, 40).unwrap());

    net.set_activations(0, Activations::Raw(vec![-100.0])).unwrap();
    renderer.render(&net, &mut surface).unwrap();
    assert_eq!(surface.frame().pixel(Point::new(20, 20)), Some(Color::rgb(20, 20, 20).to_rgb_u32()));

    net.set_activations(0, Activations::Raw(vec![100.0])).unwrap();
    renderer.render(&net, &mut surface).unwrap();
    assert_eq!(surface.frame().pixel(Point::new(20, 20)), Some(Color::rgb(0, 0, 255).to_rgb_u32()));
    assert_eq!(surface.presented(), 2);
}

#[test]
fn synapse_count_is_full_bipartite() {
    for sizes in [vec![2, 3, 1], vec![5, 5], vec![1, 7, 2, 4]] {
        let net = Network::from_sizes(&sizes).unwrap();
        let mut surface = FrameSurface::new(Canvas::new(200, 200).unwrap());
        let layout = NetworkRenderer::default().render(&net, &mut surface).unwrap();
        let expected: usize = sizes.windows(2).map(|w| w[0] * w[1]).sum();
        assert_eq!(layout.synapses.len(), expected);
    }
}

#[test]
fn construction_rejects_bad_topologies() {
    assert!(matches!(Network::new(Vec::new()), Err(VizError::InvalidTopology(_))));
    assert!(matches!(
        Layer::new(3, Activations::Raw(vec![0.0, 0.0])),
        Err(VizError::InvalidTopology(_))
    ));
}

#[test]
fn surface_reports_its_canvas() {
    let surface = FrameSurface::new(Canvas::new(12, 34).unwrap());
    assert_eq!(surface.canvas(), Canvas { width: 12, height: 34 });
}
