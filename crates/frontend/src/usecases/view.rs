use super::form::{PanelForm, INCLUSION_LABELS, WEIGHT_LABELS, WINDOW_LABELS};
use super::PanelController;
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::modal::NoticeModal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::shared::session::ControlState;
use contracts::usecases::common::ActionKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ControlPanel() -> impl IntoView {
    let controller = expect_context::<PanelController>();
    let form = expect_context::<PanelForm>();
    let state = controller.store().state();

    let controls = Memo::new(move |_| state.with(|s| s.controls()));
    let status = move || state.with(|s| s.status.clone());
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));

    let on_action = {
        let controller = controller.clone();
        Callback::new(move |kind: ActionKind| {
            let controller = controller.clone();
            let inputs = form.snapshot();
            spawn_local(async move {
                match controller.run(kind, &inputs).await {
                    Ok(summary) => {
                        for update in &summary.field_updates {
                            form.apply(update);
                        }
                    }
                    Err(e) => log::debug!("{:?} finished with {}", kind, e.code()),
                }
            });
        })
    };

    let on_recheck = {
        let controller = controller.clone();
        move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.check_availability().await;
            });
        }
    };

    let on_close = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.dismiss_notice())
    };

    view! {
        <PageFrame page_id="erp_export_panel--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"ERP 导出控制台"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_recheck
                        disabled=Signal::derive(move || !controls.get().recheck_enabled)
                    >
                        "重新检查服务"
                    </Button>
                </div>
            </div>

            <div class="panel-status" class=("panel-status--busy", move || state.with(|s| s.session.busy))>
                {status}
            </div>

            <div class="panel-sections">
                <ActionCard kind=ActionKind::Convert controls=controls on_action=on_action>
                    <FileSelect form=form controls=controls />
                </ActionCard>

                <ActionCard kind=ActionKind::Erp controls=controls on_action=on_action />

                <ActionCard kind=ActionKind::Erp10y controls=controls on_action=on_action />

                <ActionCard kind=ActionKind::Rolling controls=controls on_action=on_action>
                    <Input
                        label="滚动窗口 n（1-4000）"
                        value=form.rolling_n
                        input_type="number"
                        id="rolling_n"
                        disabled=inputs_locked(controls)
                    />
                </ActionCard>

                <ActionCard kind=ActionKind::Interval controls=controls on_action=on_action>
                    <Flex gap=FlexGap::Medium>
                        <Input
                            label="起始日期"
                            value=form.start_date
                            input_type="date"
                            id="start_date"
                            disabled=inputs_locked(controls)
                        />
                        <Input
                            label="终止日期"
                            value=form.end_date
                            input_type="date"
                            id="end_date"
                            disabled=inputs_locked(controls)
                        />
                    </Flex>
                </ActionCard>

                <ActionCard kind=ActionKind::ThermometerClean controls=controls on_action=on_action />

                <ActionCard kind=ActionKind::ThermometerPercentiles controls=controls on_action=on_action>
                    <WindowFields prefix="percentiles" form=form controls=controls />
                </ActionCard>

                <ActionCard kind=ActionKind::ThermometerMerge controls=controls on_action=on_action>
                    <WindowFields prefix="merge" form=form controls=controls />
                    <div class="form__row">
                        {form.weights.iter().zip(WEIGHT_LABELS).map(|((field, value), label)| view! {
                            <Input
                                label=label
                                value=*value
                                input_type="number"
                                id=format!("merge_{}", field)
                                disabled=inputs_locked(controls)
                            />
                        }).collect_view()}
                    </div>
                    <div class="form__row">
                        {form.inclusions.iter().zip(INCLUSION_LABELS).map(|((field, checked), label)| view! {
                            <Checkbox
                                label=label
                                checked=*checked
                                id=format!("merge_{}", field)
                                disabled=inputs_locked(controls)
                            />
                        }).collect_view()}
                    </div>
                </ActionCard>
            </div>

            <NoticeModal notice=notice on_close=on_close />
        </PageFrame>
    }
}

fn inputs_locked(controls: Memo<ControlState>) -> Signal<bool> {
    Signal::derive(move || !controls.get().inputs_enabled)
}

/// One use case: title, endpoint, its inputs and the run button
#[component]
fn ActionCard(
    kind: ActionKind,
    controls: Memo<ControlState>,
    on_action: Callback<ActionKind>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let spec = kind.spec();

    view! {
        <div class="usecase-card" id=spec.usecase.clone()>
            <Card>
                <div class="usecase-card__header">
                    <span class="usecase-card__title">{spec.display_name}</span>
                    <span class="usecase-card__endpoint">{spec.endpoint}</span>
                </div>
                <p class="usecase-card__description">{spec.description}</p>
                <div class="usecase-card__inputs">{children.map(|c| c())}</div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_action.run(kind)
                    disabled=Signal::derive(move || !controls.get().actions_enabled)
                >
                    "生成"
                </Button>
            </Card>
        </div>
    }
}

/// Workbook picker fed by the service's file list
#[component]
fn FileSelect(form: PanelForm, controls: Memo<ControlState>) -> impl IntoView {
    let controller = expect_context::<PanelController>();
    let state = controller.store().state();
    let files = Memo::new(move |_| state.with(|s| s.files.clone()));

    // Keep the selection on a listed file
    Effect::new(move || {
        let files = files.get();
        let current = form.filename.get_untracked();
        if files.iter().any(|f| *f == current) {
            return;
        }
        form.filename.set(files.first().cloned().unwrap_or_default());
    });

    view! {
        <div class="form__group">
            <label class="form__label" for="convert_filename">"Excel 文件"</label>
            <select
                id="convert_filename"
                class="form__select"
                disabled=move || !controls.get().inputs_enabled
                on:change=move |ev| form.filename.set(event_target_value(&ev))
            >
                {move || {
                    let selected = form.filename.get();
                    files.get().into_iter().map(|name| {
                        let is_selected = name == selected;
                        let value = name.clone();
                        view! { <option selected=is_selected value=value>{name}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

/// The eight window inputs shared by percentiles and merge
#[component]
fn WindowFields(
    prefix: &'static str,
    form: PanelForm,
    controls: Memo<ControlState>,
) -> impl IntoView {
    view! {
        <div class="form__row form__row--grid">
            {form.windows.iter().zip(WINDOW_LABELS).map(|((field, value), label)| view! {
                <Input
                    label=label
                    value=*value
                    input_type="number"
                    id=format!("{}_{}", prefix, field)
                    disabled=inputs_locked(controls)
                />
            }).collect_view()}
        </div>
    }
}
