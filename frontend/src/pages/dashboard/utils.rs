use crate::api::{Attendance, Employee};
use crate::utils::hr::{build_status_map, count_availability, short_date_label, Availability};

pub const TREND_DAYS: i64 = 7;
pub const CHART_WIDTH: f64 = 620.0;
pub const CHART_HEIGHT: f64 = 220.0;
pub const CHART_TICKS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

const GROUP_FILL: f64 = 0.7;
const SERIES: [Availability; 3] = [Availability::Present, Availability::Absent, Availability::Unknown];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: String,
    pub present: usize,
    pub absent: usize,
    pub no_info: usize,
}

impl TrendPoint {
    pub fn value(&self, availability: Availability) -> usize {
        match availability {
            Availability::Present => self.present,
            Availability::Absent => self.absent,
            Availability::Unknown => self.no_info,
        }
    }
}

/// One point per date, in the order given.
pub fn build_trend(employees: &[Employee], attendance: &[Attendance], dates: &[String]) -> Vec<TrendPoint> {
    dates
        .iter()
        .map(|date| {
            let counts = count_availability(employees, &build_status_map(attendance, date));
            TrendPoint {
                date: date.clone(),
                present: counts.present,
                absent: counts.absent,
                no_info: counts.no_info,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub series: Availability,
    pub value: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGroup {
    pub label: String,
    pub label_x: f64,
    pub bars: Vec<ChartBar>,
}

pub fn chart_max(points: &[TrendPoint]) -> usize {
    points
        .iter()
        .flat_map(|point| SERIES.map(|series| point.value(series)))
        .max()
        .unwrap_or(0)
        .max(1)
}

pub fn tick_y(tick: f64) -> f64 {
    CHART_HEIGHT - tick * CHART_HEIGHT
}

pub fn label_x(index: usize, len: usize) -> f64 {
    if len > 1 {
        (index as f64 * CHART_WIDTH) / (len - 1) as f64
    } else {
        CHART_WIDTH / 2.0
    }
}

pub fn layout_chart(points: &[TrendPoint]) -> Vec<ChartGroup> {
    let max = chart_max(points) as f64;
    let group_width = CHART_WIDTH / points.len().max(1) as f64;
    let inner_width = group_width * GROUP_FILL;
    let bar_width = inner_width / SERIES.len() as f64;

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let group_start = index as f64 * group_width + (group_width - inner_width) / 2.0;
            let bars = SERIES
                .iter()
                .enumerate()
                .map(|(slot, &series)| {
                    let value = point.value(series);
                    let height = value as f64 / max * CHART_HEIGHT;
                    ChartBar {
                        series,
                        value,
                        x: group_start + slot as f64 * bar_width,
                        y: CHART_HEIGHT - height,
                        width: (bar_width - 1.0).max(0.0),
                        height,
                    }
                })
                .collect();
            ChartGroup {
                label: short_date_label(&point.date),
                label_x: label_x(index, points.len()),
                bars,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AttendanceStatus;
    use crate::test_support::helpers::{attendance, employee};

    fn point(present: usize, absent: usize, no_info: usize) -> TrendPoint {
        TrendPoint {
            date: "2024-05-01".into(),
            present,
            absent,
            no_info,
        }
    }

    #[test]
    fn trend_has_one_point_per_date_summing_to_employee_count() {
        let employees = vec![
            employee("1", "Ann", "Eng"),
            employee("2", "Bob", "Ops"),
            employee("3", "Cid", "Ops"),
        ];
        let records = vec![
            attendance("a1", "1", "2024-05-01", AttendanceStatus::Present),
            attendance("a2", "2", "2024-05-01", AttendanceStatus::Absent),
            attendance("a3", "2", "2024-05-02", AttendanceStatus::Present),
            attendance("a4", "9", "2024-05-02", AttendanceStatus::Present),
        ];
        let dates = vec!["2024-05-01".to_string(), "2024-05-02".to_string(), "2024-05-03".to_string()];

        let trend = build_trend(&employees, &records, &dates);

        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0], TrendPoint { date: "2024-05-01".into(), present: 1, absent: 1, no_info: 1 });
        assert_eq!((trend[1].present, trend[1].no_info), (1, 2));
        assert_eq!(trend[2].no_info, 3);
        for point in &trend {
            assert_eq!(point.present + point.absent + point.no_info, employees.len());
        }
    }

    #[test]
    fn chart_max_is_at_least_one() {
        assert_eq!(chart_max(&[]), 1);
        assert_eq!(chart_max(&[point(0, 0, 0)]), 1);
        assert_eq!(chart_max(&[point(2, 5, 1), point(4, 0, 0)]), 5);
    }

    #[test]
    fn layout_scales_bars_against_max() {
        let groups = layout_chart(&[point(4, 2, 0), point(1, 0, 3)]);
        assert_eq!(groups.len(), 2);

        let first = &groups[0];
        assert_eq!(first.bars.len(), 3);
        assert_eq!(first.bars[0].height, CHART_HEIGHT);
        assert_eq!(first.bars[0].y, 0.0);
        assert_eq!(first.bars[1].height, CHART_HEIGHT / 2.0);
        assert_eq!(first.bars[2].height, 0.0);
        assert_eq!(first.bars[2].y, CHART_HEIGHT);

        // group width 310, inner 217, bar 72.33..
        let group_start = (310.0 - 217.0) / 2.0;
        assert!((first.bars[0].x - group_start).abs() < 1e-9);
        assert!((groups[1].bars[0].x - (310.0 + group_start)).abs() < 1e-9);
        assert!((first.bars[0].width - (217.0 / 3.0 - 1.0)).abs() < 1e-9);
    }

    #[test]
    fn labels_spread_across_width() {
        assert_eq!(label_x(0, 1), CHART_WIDTH / 2.0);
        assert_eq!(label_x(0, 7), 0.0);
        assert_eq!(label_x(6, 7), CHART_WIDTH);
        assert_eq!(tick_y(0.25), 165.0);
        assert_eq!(tick_y(1.0), 0.0);
    }
}
