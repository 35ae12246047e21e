use astracore::catalog::{RegionKind, ThreatLevel};
use astracore::geo::{PlanarPoint, Point3, RadarGrid};
use astracore::scene::{GlobeScene, RadarScene};
use iced::{
    mouse,
    widget::canvas::{self, Action, Frame, Geometry, Path, Stroke},
    Color, Event, Point, Rectangle, Renderer, Theme,
};

use crate::Message;

pub fn threat_color(level: ThreatLevel) -> Color {
    let [r, g, b] = level.rgb();
    Color::from_rgb8(r, g, b)
}

fn region_color(kind: RegionKind) -> Color {
    let [r, g, b] = kind.rgb();
    Color::from_rgb8(r, g, b)
}

/// Screen distance, in pixels, within which a click picks a marker.
const PICK_RADIUS_PX: f32 = 12.0;

fn left_click(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    )
}

fn faded(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

fn label(frame: &mut Frame, content: String, position: Point, color: Color, size: f32) {
    frame.fill_text(canvas::Text {
        content,
        position,
        color,
        size: size.into(),
        ..canvas::Text::default()
    });
}

const BACKGROUND: Color = Color {
    r: 0.02,
    g: 0.03,
    b: 0.07,
    a: 1.0,
};
const GRID: Color = Color {
    r: 0.22,
    g: 0.25,
    b: 0.32,
    a: 1.0,
};
const SWEEP: Color = Color {
    r: 0.06,
    g: 0.73,
    b: 0.51,
    a: 1.0,
};

/// Globe seen from the reference meridian; only the facing hemisphere is drawn.
pub struct GlobeView {
    pub scene: GlobeScene,
    pub elapsed: f32,
}

impl GlobeView {
    fn layout(&self, bounds: Rectangle) -> (Point, f32) {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let disk = bounds.width.min(bounds.height) / 2.0 - 16.0;
        (center, disk / (self.scene.radius as f32 * 1.1))
    }

    fn to_screen(&self, point: &Point3, center: Point, scale: f32) -> Option<Point> {
        (point.x >= 0.0).then(|| {
            Point::new(
                center.x + point.z as f32 * scale,
                center.y - point.y as f32 * scale,
            )
        })
    }
}

impl canvas::Program<Message> for GlobeView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !left_click(event) {
            return None;
        }
        let position = cursor.position_in(bounds)?;
        let (center, scale) = self.layout(bounds);
        let z = ((position.x - center.x) / scale) as f64;
        let y = ((center.y - position.y) / scale) as f64;
        let marker = self
            .scene
            .marker_near(z, y, (PICK_RADIUS_PX / scale) as f64)?;
        Some(Action::publish(Message::SelectSignal(marker.signal_id)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        let (center, scale) = self.layout(bounds);

        let surface = Path::circle(center, self.scene.radius as f32 * scale);
        frame.fill(&surface, Color::from_rgb(0.05, 0.12, 0.25));
        frame.stroke(
            &surface,
            Stroke::default().with_width(1.5).with_color(GRID),
        );

        let border = Path::new(|builder| {
            let mut pen_down = false;
            for point in &self.scene.border {
                match self.to_screen(point, center, scale) {
                    Some(screen) if pen_down => builder.line_to(screen),
                    Some(screen) => {
                        builder.move_to(screen);
                        pen_down = true;
                    }
                    None => pen_down = false,
                }
            }
        });
        frame.stroke(
            &border,
            Stroke::default().with_width(1.5).with_color(SWEEP),
        );

        for region in &self.scene.regions {
            if let Some(screen) = self.to_screen(&region.position, center, scale) {
                frame.fill(&Path::circle(screen, 2.0), region_color(region.kind));
                label(
                    &mut frame,
                    region.name.to_string(),
                    Point::new(screen.x + 4.0, screen.y - 6.0),
                    Color::from_rgb(0.75, 0.78, 0.85),
                    10.0,
                );
            }
        }

        let pulse = 1.0 + (self.elapsed * 4.0).sin() * 0.15;
        for marker in &self.scene.markers {
            let Some(screen) = self.to_screen(&marker.position, center, scale) else {
                continue;
            };
            let color = threat_color(marker.threat);
            let radius = if marker.selected { 7.0 * pulse } else { 5.0 };
            frame.fill(&Path::circle(screen, radius * 2.2), faded(color, 0.2));
            frame.fill(&Path::circle(screen, radius), color);
            if marker.selected {
                frame.stroke(
                    &Path::circle(screen, radius + 4.0),
                    Stroke::default().with_width(2.0).with_color(Color::WHITE),
                );
                label(
                    &mut frame,
                    marker.label.clone(),
                    Point::new(screen.x + 10.0, screen.y + 4.0),
                    Color::WHITE,
                    13.0,
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Top-down radar display with range rings, spokes, threat zones and a rotating sweep.
pub struct RadarView {
    pub scene: RadarScene,
    pub grid: RadarGrid,
    pub sweep_rotation: f64,
    pub elapsed: f32,
}

impl RadarView {
    fn layout(&self, bounds: Rectangle) -> (Point, f32) {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let disk = bounds.width.min(bounds.height) / 2.0 - 28.0;
        (center, disk / self.grid.radius as f32)
    }
}

impl canvas::Program<Message> for RadarView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if !left_click(event) {
            return None;
        }
        let position = cursor.position_in(bounds)?;
        let (center, scale) = self.layout(bounds);
        let point = PlanarPoint::new(
            ((position.x - center.x) / scale) as f64,
            ((position.y - center.y) / scale) as f64,
        );
        let blip = self
            .scene
            .blip_near(point, (PICK_RADIUS_PX / scale) as f64)?;
        Some(Action::publish(Message::SelectSignal(blip.signal_id)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        let (center, scale) = self.layout(bounds);
        let to_screen = |point: &PlanarPoint| {
            Point::new(
                center.x + point.x as f32 * scale,
                center.y + point.z as f32 * scale,
            )
        };

        let breathe = 1.0 + (self.elapsed * 2.0).sin() * 0.02;
        for ring in &self.scene.rings {
            let radius = ring.radius as f32 * scale * breathe;
            let (width, alpha) = if ring.outermost { (3.0, 0.6) } else { (1.0, 0.3) };
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(width)
                    .with_color(faded(GRID, alpha + 0.4)),
            );
            label(
                &mut frame,
                format!("{:.0}km", ring.label_km),
                Point::new(center.x + 3.0, center.y + radius - 14.0),
                SWEEP,
                10.0,
            );
        }

        for spoke in &self.scene.spokes {
            let tip = to_screen(&spoke.tip);
            let (width, alpha) = if spoke.major { (2.0, 0.5) } else { (1.0, 0.2) };
            frame.stroke(
                &Path::line(center, tip),
                Stroke::default()
                    .with_width(width)
                    .with_color(faded(GRID, alpha + 0.3)),
            );
            if let Some(text) = spoke.label() {
                let outside = PlanarPoint::new(spoke.tip.x * 1.08, spoke.tip.z * 1.08);
                let anchor = to_screen(&outside);
                label(
                    &mut frame,
                    text,
                    Point::new(anchor.x - 8.0, anchor.y - 6.0),
                    Color::from_rgb(0.6, 0.62, 0.68),
                    10.0,
                );
            }
        }

        for zone in &self.scene.zones {
            let at = to_screen(&zone.center);
            let color = threat_color(zone.threat);
            frame.fill(
                &Path::circle(at, zone.outer_radius as f32 * scale),
                faded(color, 0.12),
            );
            frame.fill(
                &Path::circle(at, zone.inner_radius as f32 * scale),
                faded(BACKGROUND, 0.6),
            );
        }

        let arc = self.grid.sweep_arc(self.sweep_rotation);
        let beam = Path::new(|builder| {
            builder.move_to(center);
            for point in &arc {
                builder.line_to(to_screen(point));
            }
            builder.close();
        });
        frame.fill(&beam, faded(SWEEP, 0.18));
        if let Some(leading) = arc.first() {
            frame.stroke(
                &Path::line(center, to_screen(leading)),
                Stroke::default().with_width(3.0).with_color(faded(SWEEP, 0.9)),
            );
        }
        frame.fill(&Path::circle(center, 4.0), SWEEP);

        let pulse = 1.0 + (self.elapsed * 4.0).sin() * 0.3;
        for blip in &self.scene.blips {
            let at = to_screen(&blip.position);
            let color = threat_color(blip.threat);
            for (ring, alpha) in [(6.0, 0.4), (10.0, 0.2), (14.0, 0.1)] {
                frame.stroke(
                    &Path::circle(at, ring * pulse),
                    Stroke::default().with_width(1.5).with_color(faded(color, alpha)),
                );
            }
            frame.fill(&Path::circle(at, 4.0), color);
            if blip.selected {
                frame.stroke(
                    &Path::circle(at, 18.0),
                    Stroke::default().with_width(2.0).with_color(Color::WHITE),
                );
            }
            label(
                &mut frame,
                format!("{} · {}", blip.label, blip.frequency),
                Point::new(at.x + 10.0, at.y - 16.0),
                Color::WHITE,
                11.0,
            );
            label(
                &mut frame,
                blip.threat.to_string(),
                Point::new(at.x + 10.0, at.y - 3.0),
                color,
                10.0,
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Single-series chart used for the timeline, threat and spectrum panels.
pub struct SeriesChart {
    pub values: Vec<f32>,
    pub color: Color,
    pub filled: bool,
    pub threshold: Option<f32>,
}

impl canvas::Program<Message> for SeriesChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.08),
        );

        if self.values.len() > 1 {
            let min = self
                .values
                .iter()
                .cloned()
                .chain(self.threshold)
                .fold(f32::INFINITY, f32::min);
            let max = self
                .values
                .iter()
                .cloned()
                .chain(self.threshold)
                .fold(f32::NEG_INFINITY, f32::max);
            let range = (max - min).max(f32::EPSILON);
            let step = bounds.width / (self.values.len() as f32 - 1.0);
            let y_of = |value: f32| bounds.height - (value - min) / range * bounds.height;

            let line = Path::new(|builder| {
                for (i, value) in self.values.iter().enumerate() {
                    let point = Point::new(i as f32 * step, y_of(*value));
                    if i == 0 {
                        builder.move_to(point);
                    } else {
                        builder.line_to(point);
                    }
                }
            });

            if self.filled {
                let area = Path::new(|builder| {
                    builder.move_to(Point::new(0.0, bounds.height));
                    for (i, value) in self.values.iter().enumerate() {
                        builder.line_to(Point::new(i as f32 * step, y_of(*value)));
                    }
                    builder.line_to(Point::new(bounds.width, bounds.height));
                    builder.close();
                });
                frame.fill(&area, faded(self.color, 0.3));
            }

            frame.stroke(
                &line,
                Stroke::default().with_width(2.0).with_color(self.color),
            );

            if let Some(threshold) = self.threshold {
                let y = y_of(threshold);
                frame.stroke(
                    &Path::line(Point::new(0.0, y), Point::new(bounds.width, y)),
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(threat_color(ThreatLevel::Medium)),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
