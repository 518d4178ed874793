use yew::prelude::*;

fn icon_base(path: &'static str, class: &'static str) -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class={class}>
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet_large() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2", "w-12 h-12 text-sky-400")
}
pub fn icon_budget() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2", "w-6 h-6")
}
pub fn icon_savings() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 7v10M9 10h6", "w-6 h-6")
}
pub fn icon_debt() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18", "w-6 h-6")
}
pub fn icon_alert() -> Html {
    icon_base("M12 3l10 18H2zM12 10v4M12 17h.01", "w-6 h-6")
}
pub fn icon_tips() -> Html {
    icon_base("M9 18h6M10 22h4M12 2a7 7 0 00-4 12.7V17h8v-2.3A7 7 0 0012 2z", "w-6 h-6")
}
pub fn icon_send() -> Html {
    icon_base("M22 2L11 13M22 2l-7 20-4-9-9-4z", "w-5 h-5")
}
