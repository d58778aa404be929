//! Telex input method
//!
//! Marks: s=sắc, f=huyền, r=hỏi, x=ngã, j=nặng
//! Tones: doubling (aa,ee,oo)=circumflex, w=horn/breve (aw,ow,uw)
//! Stroke: dd=đ
//! Remove: z

use super::{Method, ToneType, HORN_TARGETS_TELEX};
use crate::data::keys;

pub struct Telex;

impl Method for Telex {
    fn mark(&self, key: u16) -> Option<u8> {
        match key {
            keys::S => Some(1), // sắc
            keys::F => Some(2), // huyền
            keys::R => Some(3), // hỏi
            keys::X => Some(4), // ngã
            keys::J => Some(5), // nặng
            _ => None,
        }
    }

    fn tone(&self, key: u16) -> Option<ToneType> {
        match key {
            keys::A | keys::E | keys::O => Some(ToneType::Circumflex),
            keys::W => Some(ToneType::Horn),
            _ => None,
        }
    }

    fn tone_targets(&self, key: u16) -> &'static [u16] {
        match key {
            keys::A => &[keys::A],
            keys::E => &[keys::E],
            keys::O => &[keys::O],
            keys::W => HORN_TARGETS_TELEX,
            _ => &[],
        }
    }

    fn stroke(&self, key: u16) -> bool {
        key == keys::D
    }

    fn remove(&self, key: u16) -> bool {
        key == keys::Z
    }
}
