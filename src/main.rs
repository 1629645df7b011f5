//! Wakeroom - Main Entry Point
//!
//! Headless host for the room-escape walking simulator. Plays a scripted
//! input timeline through a session and logs the camera each second.
//!
//! Usage: `wakeroom [settings.json]`

use env_logger::Env;
use glam::Vec3;
use wakeroom_game::{FrameOutput, FrameScheduler, FrameSink, Room, Session, Settings, Timestep};
use wakeroom_physics::MovementConfig;

/// Host frames per second the script is written against.
const HOST_RATE: f32 = 60.0;

/// A scripted device event.
#[derive(Debug, Clone, Copy)]
enum Event {
    Start,
    KeyDown(&'static str),
    KeyUp(&'static str),
    Look(bool),
    Pointer(f32, f32),
    Pause,
}

/// Events keyed by the host frame they fire on.
const SCRIPT: &[(u32, Event)] = &[
    (10, Event::Start),
    (400, Event::Look(true)),
    (410, Event::KeyDown("KeyW")),
    (470, Event::Pointer(-250.0, 0.0)),
    (520, Event::KeyDown("KeyD")),
    (560, Event::KeyDown("Space")),
    (562, Event::KeyUp("Space")),
    (600, Event::KeyUp("KeyD")),
    (640, Event::Pointer(400.0, -300.0)),
    (700, Event::Pause),
    (760, Event::Pause),
    (761, Event::Look(true)),
    (800, Event::KeyUp("KeyW")),
    (900, Event::Look(false)),
];

/// Logs frames instead of drawing them.
struct LogSink {
    presented: u64,
    last_position: Vec3,
}

impl FrameSink for LogSink {
    fn present(&mut self, frame: &FrameOutput) {
        self.presented += 1;

        if self.presented % HOST_RATE as u64 == 0 {
            let moved = frame.camera.position.distance(self.last_position);
            log::info!(
                "frame {} [{:?}] eye {:.2?} yaw {:.2} pitch {:.2} moved {:.2}m whiteout {:.2}",
                frame.frame,
                frame.state,
                frame.camera.position,
                frame.camera.yaw,
                frame.camera.pitch,
                moved,
                frame.whiteout,
            );
            self.last_position = frame.camera.position;
        }
    }
}

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };

    match Settings::load(&path) {
        Ok(settings) => {
            log::info!("loaded settings from {path}");
            settings
        }
        Err(e) => {
            log::warn!("{e}, using default settings");
            Settings::default()
        }
    }
}

fn dispatch(session: &mut Session, event: Event) {
    log::debug!("event {event:?}");

    match event {
        Event::Start => session.start(),
        Event::KeyDown(code) => session.key_down(code),
        Event::KeyUp(code) => session.key_up(code),
        Event::Look(locked) => {
            session.set_look_lock(locked);
        }
        Event::Pointer(dx, dy) => session.pointer_motion(dx, dy),
        Event::Pause => {
            let pause = session.settings().controls.pause.clone();
            session.key_down(&pause);
            session.key_up(&pause);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let room = Room::bedroom();
    log::info!(
        "{}: {} x {} m, {} pieces of furniture",
        room.name,
        room.bounds.width,
        room.bounds.depth,
        room.furniture.len()
    );

    let mut session = Session::new(room, MovementConfig::default(), settings);
    let mut scheduler = FrameScheduler::new(Timestep::default());
    let mut sink = LogSink {
        presented: 0,
        last_position: Vec3::ZERO,
    };

    let last_frame = SCRIPT.last().map_or(0, |(frame, _)| *frame) + HOST_RATE as u32;
    let mut script = SCRIPT.iter().peekable();

    for host_frame in 0..=last_frame {
        while let Some((_, event)) = script.next_if(|(at, _)| *at == host_frame) {
            dispatch(&mut session, *event);
        }
        session.host_frame(&mut scheduler, 1.0 / HOST_RATE, &mut sink);
    }

    let player = session.player();
    log::info!(
        "done after {} frames: {:?} at {:.2?}",
        session.frame(),
        session.state(),
        player.position
    );
}
