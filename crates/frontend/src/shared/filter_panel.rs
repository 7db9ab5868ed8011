//! Collapsible filter panel driving the shared `FilterState`.

use crate::shared::icons::icon;
use crate::state::{today, use_app_state};
use chrono::NaiveDate;
use contracts::enums::{OrderStatus, ProductCategory, SalesChannel};
use contracts::filters::Period;
use engine::store;
use leptos::prelude::*;

fn toggle<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
    } else {
        list.push(value);
    }
}

/// Distinct cities present in the dataset, for the city multi-select.
fn known_cities() -> Vec<String> {
    let mut cities: Vec<String> = store::orders()
        .iter()
        .map(|o| o.location.city.clone())
        .collect();
    cities.sort();
    cities.dedup();
    cities
}

#[component]
pub fn FilterPanel() -> impl IntoView {
    let state = use_app_state();
    let is_expanded = RwSignal::new(false);

    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    let on_period_change = move |ev| {
        let value = event_target_value(&ev);
        let period = match value.as_str() {
            "day" => Period::Day,
            "week" => Period::Week,
            "quarter" => Period::Quarter,
            "year" => Period::Year,
            "custom" => Period::Custom,
            _ => Period::Month,
        };
        state.filters.update(|f| f.set_period(period, today()));
    };

    let on_custom_from = move |ev| {
        if let Ok(from) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
            state.filters.update(|f| {
                let to = f.custom_date_range.to.unwrap_or(from);
                f.set_custom_range(from, to.max(from));
            });
        }
    };

    let on_custom_to = move |ev| {
        if let Ok(to) = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d") {
            state.filters.update(|f| {
                let from = f.custom_date_range.from.unwrap_or(to);
                f.set_custom_range(from.min(to), to);
            });
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = state.filters.get().active_filter_count();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <select
                        class="filter-panel__period"
                        on:change=on_period_change
                        prop:value=move || match state.filters.get().period {
                            Period::Day => "day",
                            Period::Week => "week",
                            Period::Month => "month",
                            Period::Quarter => "quarter",
                            Period::Year => "year",
                            Period::Custom => "custom",
                        }
                    >
                        {Period::all().into_iter().map(|p| {
                            let code = match p {
                                Period::Day => "day",
                                Period::Week => "week",
                                Period::Month => "month",
                                Period::Quarter => "quarter",
                                Period::Year => "year",
                                Period::Custom => "custom",
                            };
                            view! { <option value=code>{p.display_name()}</option> }
                        }).collect_view()}
                    </select>
                    <input
                        type="search"
                        class="filter-panel__search"
                        placeholder="Buscar pedidos..."
                        prop:value=move || state.filters.get().search_term
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.filters.update(|f| f.search_term = term);
                        }
                    />
                </div>
            </div>

            {move || (state.filters.get().period == Period::Custom).then(|| view! {
                <div class="filter-panel__custom-range">
                    <label>
                        "Desde"
                        <input type="date" on:change=on_custom_from />
                    </label>
                    <label>
                        "Hasta"
                        <input type="date" on:change=on_custom_to />
                    </label>
                </div>
            })}

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <fieldset class="filter-group">
                        <legend>"Estado"</legend>
                        {OrderStatus::all().into_iter().map(|status| view! {
                            <label class="filter-group__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.filters.get().statuses.contains(&status)
                                    on:change=move |_| {
                                        state.filters.update(|f| toggle(&mut f.statuses, status));
                                    }
                                />
                                {status.display_name()}
                            </label>
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="filter-group">
                        <legend>"Ciudad"</legend>
                        {known_cities().into_iter().map(|city| {
                            let city_for_check = city.clone();
                            let city_for_toggle = city.clone();
                            view! {
                                <label class="filter-group__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state.filters.get().cities.contains(&city_for_check)
                                        }
                                        on:change=move |_| {
                                            let city = city_for_toggle.clone();
                                            state.filters.update(|f| toggle(&mut f.cities, city));
                                        }
                                    />
                                    {city}
                                </label>
                            }
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="filter-group">
                        <legend>"Canal"</legend>
                        {SalesChannel::all().into_iter().map(|channel| view! {
                            <label class="filter-group__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.filters.get().channels.contains(&channel)
                                    on:change=move |_| {
                                        state.filters.update(|f| toggle(&mut f.channels, channel));
                                    }
                                />
                                {channel.display_name()}
                            </label>
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="filter-group">
                        <legend>"Categoría"</legend>
                        {ProductCategory::all().into_iter().map(|category| view! {
                            <label class="filter-group__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.filters.get().categories.contains(&category)
                                    on:change=move |_| {
                                        state.filters.update(|f| toggle(&mut f.categories, category));
                                    }
                                />
                                {category.display_name()}
                            </label>
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="filter-group">
                        <legend>"Cliente"</legend>
                        {store::customers().iter().map(|c| {
                            let id_for_check = c.id.clone();
                            let id_for_toggle = c.id.clone();
                            view! {
                                <label class="filter-group__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            state.filters.get().customers.contains(&id_for_check)
                                        }
                                        on:change=move |_| {
                                            let id = id_for_toggle.clone();
                                            state.filters.update(|f| toggle(&mut f.customers, id));
                                        }
                                    />
                                    {c.name.clone()}
                                </label>
                            }
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="filter-group">
                        <legend>"Importe"</legend>
                        <label class="filter-group__option">
                            "Mín"
                            <input
                                type="number"
                                prop:value=move || state.filters.get().amount_range.min.to_string()
                                on:change=move |ev| {
                                    if let Ok(min) = event_target_value(&ev).parse::<f64>() {
                                        state.filters.update(|f| f.amount_range.min = min.max(0.0));
                                    }
                                }
                            />
                        </label>
                        <label class="filter-group__option">
                            "Máx"
                            <input
                                type="number"
                                prop:value=move || state.filters.get().amount_range.max.to_string()
                                on:change=move |ev| {
                                    if let Ok(max) = event_target_value(&ev).parse::<f64>() {
                                        state.filters.update(|f| f.amount_range.max = max);
                                    }
                                }
                            />
                        </label>
                    </fieldset>

                    <button
                        class="btn btn--secondary"
                        on:click=move |_| state.filters.update(|f| f.reset(today()))
                    >
                        "Limpiar filtros"
                    </button>
                </div>
            </div>
        </div>
    }
}
