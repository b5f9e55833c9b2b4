//! Correlated colour temperature scale shown under the gallery.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CctSegment {
    pub kelvin: u32,
    pub label: &'static str,
    /// CSS class tinting the segment
    pub tint: &'static str,
}

impl CctSegment {
    /// Tooltip, e.g. `Нейтральный — 4000K`.
    pub fn title(&self) -> String {
        format!("{} — {}K", self.label, self.kelvin)
    }
}

pub static CCT_SEGMENTS: [CctSegment; 4] = [
    CctSegment {
        kelvin: 2200,
        label: "Тёплый жёлтый",
        tint: "cct-warm-yellow",
    },
    CctSegment {
        kelvin: 2700,
        label: "Тёплый белый",
        tint: "cct-warm-white",
    },
    CctSegment {
        kelvin: 4000,
        label: "Нейтральный",
        tint: "cct-neutral",
    },
    CctSegment {
        kelvin: 6500,
        label: "Холодный белый",
        tint: "cct-cold-white",
    },
];
