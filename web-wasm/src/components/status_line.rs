//! メッセージ欄コンポーネント
//!
//! 成功メッセージは一定時間後に消える。後から出したメッセージが
//! 古いタイマーで消されないよう、表示ごとに世代番号を進める。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use parts_master_common::StatusMessage;

/// 1つのメッセージ欄の状態
#[derive(Clone, Copy)]
pub struct MessageSlot {
    message: RwSignal<Option<StatusMessage>>,
    generation: StoredValue<u64>,
    hide_after_ms: u32,
}

impl MessageSlot {
    pub fn new(hide_after_ms: u32) -> Self {
        Self {
            message: RwSignal::new(None),
            generation: StoredValue::new(0),
            hide_after_ms,
        }
    }

    pub fn show(&self, message: StatusMessage) {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);

        let auto_hide = message.auto_hides();
        self.message.set(Some(message));

        if auto_hide {
            let slot = *self;
            Timeout::new(self.hide_after_ms, move || {
                if slot.generation.get_value() == generation {
                    slot.message.set(None);
                }
            })
            .forget();
        }
    }

    pub fn get(&self) -> Option<StatusMessage> {
        self.message.get()
    }
}

/// 表示用CSSクラス（非表示時は `message` のみ）
pub fn message_class(message: Option<&StatusMessage>) -> String {
    message
        .map(|m| m.css_class())
        .unwrap_or_else(|| "message".to_string())
}

#[component]
pub fn StatusLine(slot: MessageSlot, id: &'static str) -> impl IntoView {
    view! {
        <div id=id class=move || message_class(slot.get().as_ref())>
            {move || slot.get().map(|m| m.text).unwrap_or_default()}
        </div>
    }
}
