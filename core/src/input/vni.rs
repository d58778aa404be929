//! VNI input method
//!
//! Marks: 1=sắc, 2=huyền, 3=hỏi, 4=ngã, 5=nặng
//! Tones: 6=circumflex (a/e/o), 7=horn (o/u), 8=breve (a)
//! Stroke: d+9=đ
//! Remove: 0

use super::{Method, ToneType, BREVE_TARGETS, CIRCUMFLEX_TARGETS, HORN_TARGETS_VNI};
use crate::data::keys;

pub struct Vni;

impl Method for Vni {
    fn mark(&self, key: u16) -> Option<u8> {
        match key {
            keys::N1 => Some(1),
            keys::N2 => Some(2),
            keys::N3 => Some(3),
            keys::N4 => Some(4),
            keys::N5 => Some(5),
            _ => None,
        }
    }

    fn tone(&self, key: u16) -> Option<ToneType> {
        match key {
            keys::N6 => Some(ToneType::Circumflex),
            keys::N7 => Some(ToneType::Horn),
            keys::N8 => Some(ToneType::Breve),
            _ => None,
        }
    }

    fn tone_targets(&self, key: u16) -> &'static [u16] {
        match key {
            keys::N6 => CIRCUMFLEX_TARGETS,
            keys::N7 => HORN_TARGETS_VNI,
            keys::N8 => BREVE_TARGETS,
            _ => &[],
        }
    }

    fn stroke(&self, key: u16) -> bool {
        key == keys::N9
    }

    fn remove(&self, key: u16) -> bool {
        key == keys::N0
    }
}
