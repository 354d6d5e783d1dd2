// ohm-core/src/units.rs

use uom::si::f64::{
    ElectricalConductance as UomElectricalConductance,
    ElectricalResistance as UomElectricalResistance,
};

// Public canonical unit types (SI, f64)
pub type Resistance = UomElectricalResistance;
pub type Conductance = UomElectricalConductance;

#[inline]
pub fn ohm(v: f64) -> Resistance {
    Resistance::new::<uom::si::electrical_resistance::ohm>(v)
}

#[inline]
pub fn kohm(v: f64) -> Resistance {
    Resistance::new::<uom::si::electrical_resistance::kiloohm>(v)
}

#[inline]
pub fn siemens(v: f64) -> Conductance {
    Conductance::new::<uom::si::electrical_conductance::siemens>(v)
}

/// An open circuit: infinite resistance, zero conductance.
#[inline]
pub fn open_circuit() -> Resistance {
    ohm(f64::INFINITY)
}
