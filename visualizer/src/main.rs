use astracore::analysis::{
    signal_timeline, ClassificationReport, SpectrumBin, SpectrumConfig, ThreatDistribution,
};
use astracore::catalog::{Signal, ThreatLevel};
use astracore::geo::{RadarGrid, RadarProjector, SphereProjector};
use astracore::scene::{GlobeScene, RadarScene};
use astracore::shell::{CenterView, DashboardShell, DetailPanel, Tab, SCAN_TICK_MS};
use iced::{
    time,
    widget::{
        button, column, progress_bar, row, scrollable, text, Canvas, Column, Container,
    },
    Alignment, Color, Element, Length, Subscription, Task, Theme,
};
use std::time::{Duration, Instant};
use views::{threat_color, GlobeView, RadarView, SeriesChart};

mod views;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "ASTRA SIGINT Dashboard".into()
}

fn application_subscription(state: &Visualizer) -> Subscription<Message> {
    let frames = time::every(Duration::from_millis(50)).map(|_| Message::Frame);
    if state.shell.scan().is_active() {
        Subscription::batch([
            frames,
            time::every(Duration::from_millis(SCAN_TICK_MS)).map(|_| Message::ScanTick),
        ])
    } else {
        frames
    }
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

struct Visualizer {
    shell: DashboardShell,
    sphere: SphereProjector,
    radar: RadarProjector,
    grid: RadarGrid,
    spectrum: Vec<SpectrumBin>,
    distribution: ThreatDistribution,
    started: Instant,
    elapsed: f32,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Frame,
    ScanTick,
    SelectSignal(u32),
    SwitchTab(Tab),
    StartScan,
    DispatchAlert,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let shell = DashboardShell::default();
        let distribution = ThreatDistribution::from_catalog(shell.catalog());
        (
            Visualizer {
                shell,
                sphere: SphereProjector::default(),
                radar: RadarProjector::default(),
                grid: RadarGrid::default(),
                spectrum: SpectrumConfig::default().generate(),
                distribution,
                started: Instant::now(),
                elapsed: 0.0,
                status: "OPERATIONAL".into(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Frame => {
                state.elapsed = state.started.elapsed().as_secs_f32();
            }
            Message::ScanTick => {
                state.shell.tick();
                state.refresh_status();
            }
            Message::SelectSignal(id) => {
                if let Err(err) = state.shell.select_signal(id) {
                    state.status = err.to_string();
                } else {
                    state.refresh_status();
                }
            }
            Message::SwitchTab(tab) => state.shell.switch_tab(tab),
            Message::StartScan => {
                state.shell.start_scan();
                state.refresh_status();
            }
            Message::DispatchAlert => {
                if let Err(err) = state.shell.dispatch_alert() {
                    state.status = err.to_string();
                } else {
                    state.refresh_status();
                }
            }
        }
        Task::none()
    }

    fn refresh_status(&mut self) {
        if let Some(latest) = self.shell.notifications().latest() {
            self.status = latest.message.clone();
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let layout = column![
            state.header(),
            row![state.sidebar(), state.center(), state.details()]
                .spacing(16)
                .align_y(Alignment::Start)
                .height(Length::Fill),
            state.status_bar(),
        ]
        .spacing(12)
        .padding(16);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn header(&self) -> Element<'_, Message> {
        let scan = self.shell.scan();
        let scan_button = if scan.is_active() {
            button("Scanning...").padding(10)
        } else {
            button("Initiate Scan")
                .on_press(Message::StartScan)
                .padding(10)
        };

        let mut header = Column::new().spacing(8).push(
            row![
                column![
                    text("ASTRĀ").size(28),
                    text("Automated SIGINT Threat Recognition & Analysis").size(13),
                ]
                .width(Length::Fill),
                scan_button,
                text(&self.status).size(13),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        );

        if scan.is_active() {
            header = header.push(
                row![
                    text("Scanning electromagnetic spectrum...").size(12),
                    progress_bar(0.0..=100.0, scan.progress() as f32),
                    text(format!("{}%", scan.progress())).size(12),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );
        }

        header.into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let active = self.shell.active_tab();
        let tabs = Tab::ALL.into_iter().fold(Column::new().spacing(6), |col, tab| {
            let style: fn(&Theme, button::Status) -> button::Style = if tab == active {
                button::primary
            } else {
                button::secondary
            };
            col.push(
                button(text(tab.label()))
                    .on_press(Message::SwitchTab(tab))
                    .style(style)
                    .width(Length::Fill)
                    .padding(8),
            )
        });

        let selected = self.shell.selected_id();
        let signals = self
            .shell
            .catalog()
            .iter()
            .fold(Column::new().spacing(6), |col, signal| {
                let style: fn(&Theme, button::Status) -> button::Style =
                    if selected == Some(signal.id) {
                        button::primary
                    } else {
                        button::text
                    };
                col.push(
                    button(signal_card(signal))
                        .on_press(Message::SelectSignal(signal.id))
                        .style(style)
                        .width(Length::Fill),
                )
            });

        column![
            tabs,
            text("Active Signals").size(18),
            scrollable(signals).height(Length::Fill),
        ]
        .spacing(12)
        .width(Length::Fixed(280.0))
        .into()
    }

    fn center(&self) -> Element<'_, Message> {
        let selected = self.shell.selected_id();
        let body: Element<'_, Message> = match self.shell.center_view() {
            CenterView::Globe => Canvas::new(GlobeView {
                scene: GlobeScene::build(self.shell.catalog(), &self.sphere, selected),
                elapsed: self.elapsed,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            CenterView::SignalAnalysis(signal) => self.analysis(signal),
            CenterView::NoSignalSelected => column![
                text("No Signal Selected").size(20),
                text("Click on a signal from the sidebar to view detailed analysis").size(13),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into(),
            CenterView::Radar => column![
                text("Tactical Radar").size(18),
                Canvas::new(RadarView {
                    scene: RadarScene::build(
                        self.shell.catalog(),
                        &self.radar,
                        &self.grid,
                        selected,
                    ),
                    grid: self.grid,
                    sweep_rotation: RadarGrid::sweep_rotation(self.elapsed as f64),
                    elapsed: self.elapsed,
                })
                .width(Length::Fill)
                .height(Length::Fill),
            ]
            .spacing(8)
            .into(),
            CenterView::Analytics => self.analytics(),
        };

        Container::new(body)
            .padding(8)
            .width(Length::FillPortion(2))
            .height(Length::Fill)
            .into()
    }

    fn analysis(&self, signal: &Signal) -> Element<'_, Message> {
        let timeline = signal_timeline();
        let chart = |values: Vec<f32>, color: Color, filled: bool, threshold: Option<f32>| {
            Canvas::new(SeriesChart {
                values,
                color,
                filled,
                threshold,
            })
            .width(Length::Fill)
            .height(Length::Fixed(180.0))
        };
        let report = ClassificationReport::DEMO;

        scrollable(
            column![
                text(format!("Signal Analysis: {}", signal.kind)).size(22),
                row![
                    column![
                        text("Frequency Pattern").size(15),
                        chart(
                            timeline.iter().map(|s| s.frequency_ghz as f32).collect(),
                            Color::from_rgb8(0x3B, 0x82, 0xF6),
                            false,
                            None,
                        ),
                    ]
                    .spacing(6),
                    column![
                        text("Threat Assessment").size(15),
                        chart(
                            timeline.iter().map(|s| s.threat_score as f32).collect(),
                            threat_color(ThreatLevel::High),
                            true,
                            None,
                        ),
                    ]
                    .spacing(6),
                ]
                .spacing(12),
                text("Spectrum Waterfall").size(15),
                chart(
                    self.spectrum.iter().map(|bin| bin.power as f32).collect(),
                    threat_color(ThreatLevel::Low),
                    true,
                    self.spectrum.first().map(|bin| bin.threshold as f32),
                ),
                row![
                    metric("Classification Model", report.pattern_match_pct, "Confidence"),
                    metric("Anomaly Detection", report.anomaly_score_pct, "Anomaly Score"),
                    metric("Geolocation", report.geolocation_confidence_pct, "Accuracy"),
                ]
                .spacing(12),
            ]
            .spacing(12),
        )
        .into()
    }

    fn analytics(&self) -> Element<'_, Message> {
        let report = ClassificationReport::DEMO;
        let bars = self
            .distribution
            .shares
            .iter()
            .fold(Column::new().spacing(8), |col, share| {
                col.push(
                    row![
                        text(share.level.to_string())
                            .color(threat_color(share.level))
                            .width(Length::Fixed(90.0)),
                        progress_bar(0.0..=100.0, share.percentage as f32),
                        text(share.count.to_string()).width(Length::Fixed(30.0)),
                    ]
                    .spacing(10)
                    .align_y(Alignment::Center),
                )
            });

        column![
            text("SIGINT Analytics Dashboard").size(22),
            row![
                column![
                    text("ML Processing").size(15),
                    text(report.signals_per_minute.to_string()).size(30),
                    text("Signals processed/min").size(12),
                ]
                .spacing(4)
                .width(Length::Fill),
                column![
                    text("Detection Rate").size(15),
                    text(format!("{:.1}%", report.detection_rate_pct)).size(30),
                    text("Accuracy score").size(12),
                ]
                .spacing(4)
                .width(Length::Fill),
            ]
            .spacing(12),
            text("Threat Distribution").size(17),
            bars,
        ]
        .spacing(14)
        .into()
    }

    fn details(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.shell.detail_panel() {
            DetailPanel::Empty => text("Select a signal emitter to view detailed analysis")
                .size(14)
                .into(),
            DetailPanel::Signal(signal) => {
                let report = ClassificationReport::DEMO;
                column![
                    text(signal.kind.clone()).size(20),
                    text(format!("{} THREAT", signal.threat))
                        .color(threat_color(signal.threat))
                        .size(14),
                    row![
                        column![text("Frequency").size(11), text(signal.frequency.clone()).size(16)]
                            .width(Length::Fill),
                        column![
                            text("Signal Strength").size(11),
                            text(format!("{}%", signal.strength)).size(16)
                        ]
                        .width(Length::Fill),
                    ],
                    text("Geolocation").size(15),
                    text(format!("Lat: {}", signal.position.latitude)).size(13),
                    text(format!("Lng: {}", signal.position.longitude)).size(13),
                    text(format!(
                        "Confidence: {:.1}%",
                        report.geolocation_confidence_pct
                    ))
                    .size(11),
                    text("ML Classification").size(15),
                    text(format!("Pattern Match   {:.1}%", report.pattern_match_pct)).size(13),
                    text(format!("Anomaly Score   {:.1}%", report.anomaly_score_pct)).size(13),
                    text(format!("Threat Level    {}", signal.threat))
                        .color(threat_color(signal.threat))
                        .size(13),
                    button("Dispatch Alert")
                        .on_press(Message::DispatchAlert)
                        .style(button::danger)
                        .width(Length::Fill)
                        .padding(10),
                ]
                .spacing(8)
                .into()
            }
        };

        Container::new(body)
            .padding(8)
            .width(Length::Fixed(280.0))
            .into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        let recent = self
            .shell
            .notifications()
            .recent()
            .take(3)
            .map(|n| n.message.as_str())
            .collect::<Vec<_>>()
            .join("  |  ");

        row![
            text("ML Models: Active").size(12),
            text(format!(
                "SIGINT Collectors: {} Online",
                self.shell.catalog().len()
            ))
            .size(12),
            text(format!("Uptime: {:.0}s", self.elapsed)).size(12),
            text(recent).size(12).width(Length::Fill),
            text("ASTRĀ v2.1.0 | Classification: UNCLASSIFIED").size(11),
        ]
        .spacing(20)
        .into()
    }
}

fn signal_card(signal: &Signal) -> Element<'_, Message> {
    column![
        row![
            text(signal.kind.clone()).size(14).width(Length::Fill),
            text(signal.threat.to_string())
                .size(11)
                .color(threat_color(signal.threat)),
        ],
        text(format!("Freq: {}", signal.frequency)).size(11),
        text(format!("Strength: {}%", signal.strength)).size(11),
        text(format!("Location: {}", signal.coordinates_label())).size(11),
    ]
    .spacing(2)
    .into()
}

fn metric<'a>(title: &'a str, value: f64, caption: &'a str) -> Element<'a, Message> {
    column![
        text(title).size(14),
        text(format!("{:.1}%", value)).size(24),
        text(caption).size(11),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}
