/*
 *  main.rs
 *
 *  WeatherStar - local on the 8s
 *  (c) 2020-26 Stuart Hunter
 *
 *  Render the Local on the 8s screen to the terminal and PNG
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use anyhow::{Context, Result};
use chrono::Local;
use env_logger::Env;
use log::{error, info, warn};
use std::io;
use std::time::Duration;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

use weatherstar::config::{self, Config};
use weatherstar::display::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use weatherstar::func_timer::FunctionTimer;
use weatherstar::{
    compose, DisplayRecord, FrameEncoder, PixelSurface, PngEncoder, TerminalEncoder, Theme,
    Timestamp,
};

/// The record for this frame: the configured YAML if any, otherwise the
/// built-in sample. An empty timestamp is filled from the local clock.
fn current_record(cfg: &Config) -> Result<DisplayRecord> {
    let now = Timestamp::from_datetime(&Local::now());
    let record = match cfg.data.as_deref() {
        Some(path) => {
            let mut r = DisplayRecord::load(path)
                .with_context(|| format!("loading display record {}", path.display()))?;
            if r.timestamp.time.is_empty() && r.timestamp.date.is_empty() {
                r.timestamp = now;
            }
            r
        }
        None => DisplayRecord::sample(now),
    };
    Ok(record)
}

/// Compose one fresh frame and hand it to every enabled encoder.
fn render_once(cfg: &Config, theme: &Theme) -> Result<()> {
    let record = current_record(cfg)?;
    let (w, h) = cfg.canvas_size();

    let mut surface = PixelSurface::new(w, h, theme.background_top, theme.background_bottom);
    {
        let _t = FunctionTimer::new("compose");
        compose(&mut surface, &record, theme);
    }

    if cfg.ansi_enabled() {
        let mut term = TerminalEncoder::new(io::stdout().lock());
        run_encoder(&mut term, &surface, "stdout")?;
    }

    if let Some(path) = cfg.screenshot() {
        let mut png = PngEncoder::new(path);
        let dest = png.path().display().to_string();
        run_encoder(&mut png, &surface, &dest)?;
    }
    Ok(())
}

fn run_encoder<E: FrameEncoder>(encoder: &mut E, surface: &PixelSurface, dest: &str) -> Result<()> {
    let name = encoder.name();
    let _t = FunctionTimer::new(name);
    encoder
        .encode(surface)
        .with_context(|| format!("{} output to {}", name, dest))
}

/// Shutdown signals, registered up front so a signal that lands while a
/// frame is being drawn is still caught.
#[cfg(unix)]
struct ShutdownSignals {
    sigint: Signal,
    sigterm: Signal,
    sighup: Signal,
}

#[cfg(unix)]
impl ShutdownSignals {
    fn install() -> io::Result<Self> {
        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
            sighup: signal(SignalKind::hangup())?,
        })
    }

    async fn recv(&mut self) {
        tokio::select! {
            _ = self.sigint.recv() => info!("SIGINT received, shutting down"),
            _ = self.sigterm.recv() => info!("SIGTERM received, shutting down"),
            _ = self.sighup.recv() => info!("SIGHUP received, shutting down"),
        }
    }
}

#[cfg(not(unix))]
struct ShutdownSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(not(unix))]
impl ShutdownSignals {
    fn install() -> io::Result<Self> {
        Ok(Self { ctrl_c: tokio::signal::windows::ctrl_c()? })
    }

    async fn recv(&mut self) {
        self.ctrl_c.recv().await;
        info!("Ctrl-C received, shutting down");
    }
}

/// Redraw from scratch every `period` until a shutdown signal arrives.
/// A failed frame is logged and the loop carries on.
async fn refresh_loop(cfg: &Config, theme: &Theme, period: Duration) -> Result<()> {
    let mut shutdown = ShutdownSignals::install().context("installing signal handlers")?;
    info!("refreshing every {:?}", period);
    loop {
        let frame = FunctionTimer::new("frame");
        if let Err(e) = render_once(cfg, theme) {
            error!("frame failed: {:#}", e);
        }
        // keep the cadence: the next frame starts `period` after this one did
        let wait = period.saturating_sub(frame.elapsed());
        drop(frame);
        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = shutdown.recv() => break,
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = config::load().context("loading configuration")?;

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} v.{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (w, h) = cfg.canvas_size();
    if (w, h) != (CANVAS_WIDTH, CANVAS_HEIGHT) {
        warn!("canvas {}x{}: layout is fixed for 640x400, regions will clip or leave gaps", w, h);
    }
    let theme = cfg.theme();

    match cfg.refresh_secs() {
        Some(secs) => refresh_loop(&cfg, &theme, Duration::from_secs(secs)).await,
        None => render_once(&cfg, &theme),
    }
}
