// pf-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Power as UomPower, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Power = UomPower;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _d = m(0.15);
        let _v = mps(1.9812);
        let _q = m3ps(0.05);
        let _p = kw(7.2);
    }

    #[test]
    fn kilowatt_round_trip() {
        use uom::si::power::{kilowatt, watt};
        let p = kw(7.206);
        assert!((p.get::<watt>() - 7206.0).abs() < 1e-9);
        assert!((p.get::<kilowatt>() - 7.206).abs() < 1e-12);
    }
}
