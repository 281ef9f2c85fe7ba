use fare_solver::{
    Map, PricePoint, PricingOutcome, Recommendation,
    surge::{SurgeOutcome, SurgeSweep},
};

/// Rounding applied to reported values when `output.round` is set.
///
/// Money is rounded to cents and rides to whole numbers. Rounded outcomes are
/// for display only: `revenue == price * demand` no longer holds exactly.
pub trait Round {
    fn round(&mut self);
}

fn to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn cents(value: f64) -> f64 {
    to_places(value, 2)
}

impl Round for PricePoint {
    fn round(&mut self) {
        self.price = cents(self.price);
        self.demand = self.demand.round();
        self.revenue = cents(self.revenue);
        self.cost = self.cost.map(cents);
        self.profit = self.profit.map(cents);
        self.margin = self.margin.map(|margin| to_places(margin, 4));
    }
}

impl Round for Recommendation {
    fn round(&mut self) {
        self.recommended_price = cents(self.recommended_price);
        self.point.round();
        self.objective_value = cents(self.objective_value);
        self.current_price = cents(self.current_price);
        self.profit_improvement_pct = self.profit_improvement_pct.map(cents);
    }
}

impl Round for PricingOutcome {
    fn round(&mut self) {
        self.points.iter_mut().for_each(Round::round);
        self.recommendation.round();
    }
}

impl Round for SurgeOutcome {
    fn round(&mut self) {
        self.multiplier = cents(self.multiplier);
        self.demand = self.demand.round();
        self.revenue = cents(self.revenue);
    }
}

impl Round for SurgeSweep {
    fn round(&mut self) {
        self.outcomes.iter_mut().for_each(Round::round);
        self.best.round();
    }
}

impl<K, T: Round> Round for Map<K, T> {
    fn round(&mut self) {
        self.values_mut().for_each(Round::round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fare_solver::CostModel;

    #[test]
    fn test_point() {
        let cost = CostModel::new(8.0, 50000.0, 0.3);
        let mut point = PricePoint::evaluate(12.345, 1999.6, Some(&cost));
        point.round();

        assert_eq!(point.price, 12.35);
        assert_eq!(point.demand, 2000.0);
        assert_eq!(point.revenue, 24685.06);
        assert_eq!(point.cost, Some(65996.8));
        assert_eq!(point.profit, Some(-41311.74));
        assert_eq!(point.margin, Some(-1.6736));
    }

    #[test]
    fn test_surge() {
        let mut outcome = fare_solver::surge::SurgeModel::default()
            .simulate(1.15)
            .unwrap();
        outcome.round();
        assert_eq!(outcome.multiplier, 1.15);
        assert_eq!(outcome.demand, 1880.0);
        assert_eq!(outcome.revenue, 25944.0);
    }
}
