pub use self::{area_effect::*, combatant::*, elimination::*, judgment::*, position::*};

pub(crate) mod area_effect;
pub(crate) mod combatant;
pub(crate) mod elimination;
pub(crate) mod judgment;
pub(crate) mod position;
