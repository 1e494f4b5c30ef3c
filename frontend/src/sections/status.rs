use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::power_chart::PowerChart;
use crate::components::reveal::Reveal;
use crate::config;
use crate::simulation::StatusReadings;

pub enum StatusAction {
    Tick,
}

impl Reducible for StatusReadings {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StatusAction::Tick => {
                let mut next = (*self).clone();
                next.tick(&mut rand::thread_rng());
                next.into()
            }
        }
    }
}

const STATUS_CSS: &str = r#"
    .status-section {
        width: 100%;
        min-height: 100vh;
        padding: 4rem 2.5rem;
        background: linear-gradient(to bottom right, #f0f9ff, #e0f2fe, #e0f7ff);
        color: #374151;
        box-sizing: border-box;
    }
    .status-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        margin-bottom: 3rem;
    }
    .status-grid.two {
        grid-template-columns: repeat(2, 1fr);
    }
    .status-card {
        background: #fff;
        padding: 1.5rem;
        border-radius: 1.5rem;
        border: 1px solid #bae6fd;
        box-shadow: 0 0 25px rgba(56, 189, 248, 0.15);
        transition: transform 0.5s ease, box-shadow 0.5s ease;
        height: 100%;
        box-sizing: border-box;
    }
    .status-card:hover {
        transform: scale(1.03);
        box-shadow: 0 0 35px rgba(56, 189, 248, 0.25);
    }
    .status-card h3 {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #0369a1;
        font-size: 1.25rem;
        margin: 0 0 1rem 0;
    }
    .meter {
        width: 100%;
        height: 0.75rem;
        background: #e0f2fe;
        border-radius: 9999px;
        overflow: hidden;
        margin-bottom: 0.5rem;
    }
    .meter.thin {
        height: 0.5rem;
    }
    .meter-fill {
        height: 100%;
        background: #0ea5e9;
        transition: width 0.6s ease;
    }
    .pill {
        display: inline-block;
        margin-top: 0.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #e0f2fe;
        color: #0369a1;
        font-size: 0.875rem;
    }
    .ok { color: #0284c7; }
    .bad { color: #f87171; }
    .power-toggle {
        padding: 0.5rem 1.5rem;
        border-radius: 0.75rem;
        border: none;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.2s ease, transform 0.1s ease;
    }
    .power-toggle:active { transform: scale(0.95); }
    .power-toggle.on { background: #0ea5e9; color: #fff; }
    .power-toggle.off { background: #d1d5db; color: #374151; }
    .mode-box {
        background: #f0f9ff;
        border: 1px solid #e0f2fe;
        border-radius: 0.75rem;
        padding: 0.5rem 1rem;
        color: #0369a1;
    }
    .emergency-stop {
        margin-top: 2rem;
        width: 100%;
        padding: 0.75rem;
        border: none;
        border-radius: 0.75rem;
        background: #ef4444;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.2s ease, transform 0.2s ease;
    }
    .emergency-stop:hover { background: #dc2626; transform: scale(1.03); }
    .sensor-row {
        display: flex;
        justify-content: space-between;
        font-size: 0.875rem;
        color: #475569;
        margin-bottom: 0.25rem;
    }
    .load-support {
        margin-top: 1.5rem;
        text-align: center;
        color: #0284c7;
        font-weight: 600;
    }
    .load-support span { font-size: 1.5rem; }
    @media (max-width: 900px) {
        .status-grid, .status-grid.two { grid-template-columns: 1fr; }
    }
"#;

fn meter(percent: f64, thin: bool) -> Html {
    html! {
        <div class={classes!("meter", thin.then(|| "thin"))}>
            <div class="meter-fill" style={format!("width: {:.1}%;", percent.clamp(0.0, 100.0))}></div>
        </div>
    }
}

#[function_component(ExoSkeletonStatus)]
pub fn exoskeleton_status() -> Html {
    let readings = use_reducer(StatusReadings::default);
    let system_power = use_state(|| true);

    {
        let readings = readings.clone();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(config::STATUS_TICK_MS, move || {
                readings.dispatch(StatusAction::Tick);
            });
            move || drop(interval)
        }, ());
    }

    let toggle_power = {
        let system_power = system_power.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("System power switched {}", if *system_power { "off" } else { "on" });
            system_power.set(!*system_power);
        })
    };

    let emergency_stop = Callback::from(|_: MouseEvent| {
        log::info!("Emergency stop pressed");
    });

    let connected = readings.connected;
    let samples: Vec<_> = readings.history.iter().cloned().collect();
    let sensors = [
        ("Hip Angle", format!("{:.1}", readings.hip_angle), "°", readings.hip_angle),
        ("Knee Angle", format!("{:.1}", readings.knee_angle), "°", readings.knee_angle),
        ("EEG Signal", readings.eeg_signal.to_string(), "%", readings.eeg_signal as f64),
    ];

    html! {
        <section class="status-section">
            <style>{STATUS_CSS}</style>
            <Reveal>
                <h2 class="section-title sky">{"ExoSkeleton Live Status"}</h2>
            </Reveal>

            <div class="status-grid">
                <Reveal>
                    <div class="status-card">
                        <h3>{"🔋 Battery Status"}</h3>
                        { meter(readings.battery, false) }
                        <p>{format!("Level: {:.1}%", readings.battery)}</p>
                        <span class="pill">{readings.health().label()}</span>
                    </div>
                </Reveal>
                <Reveal delay_ms={150}>
                    <div class="status-card">
                        <h3>{"⚡ Power Consumption"}</h3>
                        <PowerChart {samples} />
                        <p>
                            {"Current Power: "}
                            <span class="ok"><strong>{format!("{:.1}W", readings.power)}</strong></span>
                        </p>
                    </div>
                </Reveal>
                <Reveal delay_ms={300}>
                    <div class="status-card">
                        <h3 class={if connected { "ok" } else { "bad" }}>{"📶 Connection Status"}</h3>
                        <p class={if connected { "ok" } else { "bad" }}>
                            <strong>{if connected { "Connected" } else { "Disconnected" }}</strong>
                        </p>
                        <p>{format!("EEG Headband: {}", if connected { "Active" } else { "Disconnected" })}</p>
                        <p>{format!("Signal Quality: {}", if connected { "Good" } else { "Poor" })}</p>
                    </div>
                </Reveal>
            </div>

            <div class="status-grid two">
                <Reveal>
                    <div class="status-card">
                        <h3>{"⏻ System Controls"}</h3>
                        <p>{"System Power"}</p>
                        <button
                            class={classes!("power-toggle", if *system_power { "on" } else { "off" })}
                            onclick={toggle_power}
                        >
                            {if *system_power { "ON" } else { "OFF" }}
                        </button>
                        <div style="margin-top: 1.5rem;">
                            <p>{"Operation Mode"}</p>
                            <div class="mode-box">{"Walking Assist"}</div>
                        </div>
                        <button class="emergency-stop" onclick={emergency_stop}>
                            {"⚠ Emergency Stop"}
                        </button>
                    </div>
                </Reveal>
                <Reveal delay_ms={200}>
                    <div class="status-card">
                        <h3>{"📈 Sensors & Feedback"}</h3>
                        { for sensors.iter().map(|(label, value, unit, percent)| html! {
                            <div style="margin-bottom: 1.25rem;">
                                <div class="sensor-row">
                                    <span>{*label}</span>
                                    <span>{format!("{}{}", value, unit)}</span>
                                </div>
                                { meter(*percent, true) }
                            </div>
                        }) }
                        <div class="load-support">
                            {"Load Support: "}<span>{format!("{:.1} kg", readings.load_support)}</span>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
