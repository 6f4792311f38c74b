use crate::base::{check_positive, check_same_len, RockPhysError};

/// Holds the elastic impedance logs for the different reflection modes
#[derive(Clone, Debug)]
pub struct ElasticImpedance {
    /// PP elastic impedance
    pub pp: Vec<f64>,

    /// P to SV elastic impedance
    pub psv: Vec<f64>,

    /// SV to P elastic impedance
    pub svp: Vec<f64>,

    /// SV to SV elastic impedance
    pub svsv: Vec<f64>,

    /// SH to SH elastic impedance
    pub shsh: Vec<f64>,
}

/// Computes the elastic impedance of an isotropic, flat-layered earth
///
/// The exponents are written with a constant ratio `sp = Vs/Vp`, usually the ratio of the
/// mean velocities. The S-wave angle is θs = asin(sp sinθ).
///
/// ```text
/// EIpp(θ) = Vp^(1 + tan²θ) Vs^(-8 sp² sin²θ) ρ^(1 - 4 sp² sin²θ)
/// ```
///
/// # Input
///
/// * `vp`, `vs`, `rho` -- logs of P-wave velocity, S-wave velocity and density
/// * `theta` -- angle of incidence (degrees)
/// * `sp` -- constant Vs/Vp ratio (0 < sp < 1)
/// * `normalize` -- divide the logs by their means and scale the results by the mean
///   impedances, so the impedances have the units of the acoustic impedance
///
/// # Reference
///
/// 1. Connolly P (1999) Elastic impedance, The Leading Edge 18(4):438-452
/// 2. González EF (2006) Physical and quantitative interpretation of seismic attributes
///    for rocks and fluids identification, PhD thesis, Stanford University
pub fn elastic_impedance(
    vp: &[f64],
    vs: &[f64],
    rho: &[f64],
    theta: f64,
    sp: f64,
    normalize: bool,
) -> Result<ElasticImpedance, RockPhysError> {
    let n = check_same_len("Vp, Vs, rho", &[vp.len(), vs.len(), rho.len()])?;
    check_positive("Vp", vp)?;
    check_positive("Vs", vs)?;
    check_positive("rho", rho)?;
    if !(sp > 0.0 && sp < 1.0) {
        return Err(RockPhysError::InvalidParameter(format!(
            "sp = {:?} is incorrect; it must satisfy 0.0 < sp < 1.0",
            sp
        )));
    }

    let mean = |v: &[f64]| v.iter().sum::<f64>() / (n as f64);
    let (mvp, mvs, mrho) = if normalize {
        (mean(vp), mean(vs), mean(rho))
    } else {
        (1.0, 1.0, 1.0)
    };
    let ipn = mvp * mrho;
    let isn = mvs * mrho;

    let theta = theta.to_radians();
    let (sin, cos) = f64::sin_cos(theta);
    let tan = f64::tan(theta);
    let theta_s = f64::asin(sp * sin);
    let (sin_s, cos_s) = f64::sin_cos(theta_s);
    let tan_s = f64::tan(theta_s);
    let sp2 = sp * sp;

    // exponents (Vp, Vs, rho) of each mode
    let pp = (1.0 + tan * tan, -8.0 * sp2 * sin * sin, 1.0 - 4.0 * sp2 * sin * sin);
    let root = f64::sqrt(1.0 - sp2 * sin * sin);
    let psv = (
        0.0,
        sin / root * (4.0 * sin * sin * sp2 - 4.0 * sp * cos * root),
        -sin / root * (1.0 - 2.0 * sin * sin * sp2 + 2.0 * sp * cos * root),
    );
    let root_s = f64::sqrt(1.0 - sin_s * sin_s / sp2);
    let svp = (
        0.0,
        sin_s / root_s * (4.0 * sin_s * sin_s - 4.0 * sp * cos_s * root_s),
        -sin_s / root_s * (1.0 - 2.0 * sin_s * sin_s + 2.0 * sp * cos_s * root_s),
    );
    let svsv = (
        0.0,
        -1.0 / (cos_s * cos_s) + 8.0 * sin_s * sin_s,
        -1.0 + 4.0 * sin_s * sin_s,
    );
    let shsh = (0.0, -1.0 + tan_s * tan_s, -1.0);

    let log = |scale: f64, (a, b, c): (f64, f64, f64)| -> Vec<f64> {
        (0..n)
            .map(|i| {
                scale
                    * f64::powf(vp[i] / mvp, a)
                    * f64::powf(vs[i] / mvs, b)
                    * f64::powf(rho[i] / mrho, c)
            })
            .collect()
    };

    Ok(ElasticImpedance {
        pp: log(ipn, pp),
        psv: log(ipn, psv),
        svp: log(isn, svp),
        svsv: log(isn, svsv),
        shsh: log(isn, shsh),
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::elastic_impedance;
    use approx::assert_relative_eq;

    const VP: [f64; 3] = [2800.0, 3000.0, 3400.0];
    const VS: [f64; 3] = [1300.0, 1500.0, 1900.0];
    const RHO: [f64; 3] = [2.3, 2.4, 2.5];

    #[test]
    fn elastic_impedance_captures_errors() {
        assert_eq!(
            elastic_impedance(&VP, &VS[..2], &RHO, 10.0, 0.5, true).err().unwrap().to_string(),
            "invalid parameter: Vp, Vs, rho must have the same length; found [3, 2, 3]"
        );
        assert_eq!(
            elastic_impedance(&VP, &VS, &RHO, 10.0, 1.2, true).err().unwrap().to_string(),
            "invalid parameter: sp = 1.2 is incorrect; it must satisfy 0.0 < sp < 1.0"
        );
        assert_eq!(
            elastic_impedance(&VP, &[1.0, -1.0, 1.0], &RHO, 10.0, 0.5, true)
                .err()
                .unwrap()
                .to_string(),
            "invalid parameter: Vs[1] = -1.0 is incorrect; it must be finite and > 0.0"
        );
    }

    #[test]
    fn normal_incidence_gives_the_acoustic_impedance() {
        for normalize in [false, true] {
            let ei = elastic_impedance(&VP, &VS, &RHO, 0.0, 0.5, normalize).unwrap();
            for i in 0..3 {
                assert_relative_eq!(ei.pp[i], VP[i] * RHO[i], max_relative = 1e-14);
            }
        }
        let ei = elastic_impedance(&VP, &VS, &RHO, 0.0, 0.5, false).unwrap();
        assert_eq!(ei.psv, &[1.0, 1.0, 1.0]);
        for i in 0..3 {
            assert_relative_eq!(ei.shsh[i], 1.0 / (VS[i] * RHO[i]), max_relative = 1e-14);
        }
    }

    #[test]
    fn uniform_logs_normalize_to_the_mean_impedance() {
        let vp = [3000.0; 4];
        let vs = [1500.0; 4];
        let rho = [2.4; 4];
        for theta in [10.0, 20.0, 30.0] {
            let ei = elastic_impedance(&vp, &vs, &rho, theta, 0.5, true).unwrap();
            for i in 0..4 {
                assert_relative_eq!(ei.pp[i], 3000.0 * 2.4, max_relative = 1e-14);
                assert_relative_eq!(ei.svsv[i], 1500.0 * 2.4, max_relative = 1e-14);
            }
        }
    }
}
