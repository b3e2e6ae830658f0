use crate::pages::dashboard::utils::{
    layout_chart, tick_y, TrendPoint, CHART_HEIGHT, CHART_TICKS, CHART_WIDTH,
};
use crate::utils::hr::Availability;
use leptos::*;

fn series_fill(series: Availability) -> &'static str {
    match series {
        Availability::Present => "fill-status-success-text",
        Availability::Absent => "fill-status-warning-text",
        Availability::Unknown => "fill-fg-muted",
    }
}

fn legend_label(series: Availability) -> &'static str {
    match series {
        Availability::Present => "Active",
        Availability::Absent => "Leave",
        Availability::Unknown => "No info",
    }
}

#[component]
pub fn TrendChart(points: Signal<Vec<TrendPoint>>) -> impl IntoView {
    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT + 30.0);

    view! {
        <section class="rounded-3xl border border-border bg-surface-elevated p-4 shadow-sm md:p-6">
            <div class="mb-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <div>
                    <h2 class="text-lg font-bold text-fg">"Attendance Overview"</h2>
                    <p class="text-sm text-fg-muted">"Active, leave, and no-info counts over recent dates."</p>
                </div>
                <div class="flex gap-4 text-xs text-fg-muted">
                    {[Availability::Present, Availability::Absent, Availability::Unknown]
                        .into_iter()
                        .map(|series| {
                            view! {
                                <span class="flex items-center gap-1">
                                    <svg class="h-3 w-3" viewBox="0 0 10 10" aria-hidden="true">
                                        <rect width="10" height="10" rx="2" class=series_fill(series)></rect>
                                    </svg>
                                    {legend_label(series)}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <svg
                viewBox=view_box
                class="h-64 w-full"
                role="img"
                aria-label="Attendance trend bar chart"
            >
                {CHART_TICKS
                    .into_iter()
                    .map(|tick| {
                        let y = tick_y(tick);
                        view! {
                            <line
                                x1="0"
                                x2=CHART_WIDTH
                                y1=y
                                y2=y
                                class="stroke-border"
                                stroke-dasharray="4 4"
                            ></line>
                        }
                    })
                    .collect_view()}
                {move || {
                    layout_chart(&points.get())
                        .into_iter()
                        .map(|group| {
                            view! {
                                <g>
                                    {group
                                        .bars
                                        .into_iter()
                                        .map(|bar| {
                                            view! {
                                                <rect
                                                    x=bar.x
                                                    y=bar.y
                                                    width=bar.width
                                                    height=bar.height
                                                    rx="3"
                                                    class=series_fill(bar.series)
                                                    data-value=bar.value
                                                ></rect>
                                            }
                                        })
                                        .collect_view()}
                                    <text
                                        x=group.label_x
                                        y=CHART_HEIGHT + 20.0
                                        text-anchor="middle"
                                        font-size="11"
                                        class="fill-fg-muted"
                                    >
                                        {group.label}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, text_content};

    #[test]
    fn chart_renders_three_bars_per_date_and_ticks() {
        let html = render_to_string(move || {
            let points = Signal::derive(|| {
                vec![
                    TrendPoint { date: "2024-05-01".into(), present: 2, absent: 1, no_info: 0 },
                    TrendPoint { date: "2024-05-02".into(), present: 1, absent: 1, no_info: 1 },
                ]
            });
            view! { <TrendChart points=points /> }
        });
        assert!(html.contains("viewBox=\"0 0 620 250\""));
        assert!(html.contains("aria-label=\"Attendance trend bar chart\""));
        assert_eq!(html.matches("<rect").count(), 3 + 6);
        assert_eq!(html.matches("stroke-dasharray=\"4 4\"").count(), 4);
        let text = text_content(&html);
        assert!(text.contains("May 1"));
        assert!(text.contains("May 2"));
        assert!(html.contains("data-value=\"2\""));
    }
}
