/// Sound for a terminal: effects ring the bell, music is a flag.

use std::io::Write;

use crate::entities::GameEvent;

const BELL: &str = "\x07";

#[derive(Debug, Default)]
pub struct Jukebox {
    muted: bool,
    music_playing: bool,
}

impl Jukebox {
    pub fn new(muted: bool) -> Self {
        Jukebox {
            muted,
            music_playing: false,
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Play whatever `event` calls for.  Fire-and-forget: nothing waits for
    /// the sound to finish.
    pub fn play<W: Write>(&mut self, out: &mut W, event: &GameEvent) -> std::io::Result<()> {
        tracing::debug!(?event, "audio");
        let ring = match *event {
            GameEvent::MusicStart => {
                self.music_playing = true;
                false
            }
            GameEvent::MusicStop => {
                self.music_playing = false;
                false
            }
            GameEvent::ShipExplosion | GameEvent::GameOver | GameEvent::BonusLife => true,
            GameEvent::NewHighScore { first_crossing, .. } => first_crossing,
            GameEvent::AlienHit | GameEvent::LevelUp { .. } => false,
        };
        if ring && !self.muted {
            out.write_all(BELL.as_bytes())?;
        }
        Ok(())
    }
}
