//! Scenario adjustment of historical observations.

use data_spi::DataError;
use forecast_api::ScenarioBindings;
use forecast_spi::{ForecastError, Observations, Result, ScenarioParams};

/// Copy of `observations` with the bound driver columns rescaled.
///
/// Budget, pricing and seasonality bind to their named column, or to
/// feature positions 0, 1 and 2 when unnamed (skipped if the position does
/// not exist). Competitor activity applies only to a named column. The
/// input is never modified.
pub fn apply_scenario(
    observations: &Observations,
    params: &ScenarioParams,
    bindings: &ScenarioBindings,
) -> Result<Observations> {
    let adjustments = [
        ("marketing_budget", params.marketing_budget, &bindings.marketing_budget, Some(0)),
        ("pricing", params.pricing, &bindings.pricing, Some(1)),
        ("seasonality", params.seasonality, &bindings.seasonality, Some(2)),
        (
            "competitor_activity",
            params.competitor_activity,
            &bindings.competitor_activity,
            None,
        ),
    ];

    let mut adjusted = observations.clone();
    for (name, percent, binding, fallback) in adjustments {
        if !percent.is_finite() {
            return Err(ForecastError::invalid_parameter(name, "must be a finite percentage"));
        }

        let index = match binding {
            Some(column) => Some(
                observations
                    .feature_index(column)
                    .ok_or_else(|| DataError::ColumnNotFound(column.clone()))?,
            ),
            None => fallback.filter(|&i| i < observations.feature_names().len()),
        };

        if let Some(index) = index {
            adjusted.scale_feature(index, ScenarioParams::factor(percent));
        }
    }

    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observations() -> Observations {
        Observations::from_numeric_rows(&[
            vec![100.0, 10.0, 1.0, 5.0, 1000.0],
            vec![200.0, 20.0, 2.0, 6.0, 2000.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_positional_defaults() {
        let base = observations();
        let params = ScenarioParams::new(20.0, -10.0, 50.0).with_competitor_activity(30.0);
        let adjusted = apply_scenario(&base, &params, &ScenarioBindings::default()).unwrap();

        let first = &adjusted.rows()[0];
        assert!((first.features[0].unwrap() - 120.0).abs() < 1e-9);
        assert!((first.features[1].unwrap() - 9.0).abs() < 1e-9);
        assert!((first.features[2].unwrap() - 1.5).abs() < 1e-9);
        // competitor unbound, target untouched
        assert_eq!(first.features[3], Some(5.0));
        assert_eq!(first.target, Some(1000.0));
        // input left alone
        assert_eq!(base.rows()[0].features[0], Some(100.0));
    }

    #[test]
    fn test_named_bindings() {
        let base = observations();
        let bindings = ScenarioBindings::default()
            .with_marketing_budget("feature_3")
            .with_competitor_activity("feature_0");
        let params = ScenarioParams::new(100.0, 0.0, 0.0).with_competitor_activity(-50.0);
        let adjusted = apply_scenario(&base, &params, &bindings).unwrap();

        assert_eq!(adjusted.rows()[1].features[3], Some(12.0));
        assert_eq!(adjusted.rows()[1].features[0], Some(100.0));
    }

    #[test]
    fn test_unknown_binding() {
        let bindings = ScenarioBindings::default().with_pricing("price");
        let result = apply_scenario(&observations(), &ScenarioParams::default(), &bindings);
        assert!(matches!(
            result,
            Err(ForecastError::Data(DataError::ColumnNotFound(_)))
        ));
    }

    #[test]
    fn test_missing_positions_are_skipped() {
        let narrow = Observations::from_numeric_rows(&[vec![10.0, 1.0]]).unwrap();
        let adjusted =
            apply_scenario(&narrow, &ScenarioParams::new(10.0, 10.0, 10.0), &ScenarioBindings::default())
                .unwrap();
        assert!((adjusted.rows()[0].features[0].unwrap() - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_finite() {
        let params = ScenarioParams::new(f64::INFINITY, 0.0, 0.0);
        assert!(apply_scenario(&observations(), &params, &ScenarioBindings::default()).is_err());
    }
}
