//! About page: static service description. No API calls.

use leptos::prelude::*;

/// About page describing the TradingAgents service.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"关于"</h1>
            <p>
                "TradingAgents 是一个多智能体股票分析平台：市场、新闻、社媒与基本面分析师"
                "协作研究一只股票，并给出交易建议。"
            </p>
            <p>
                "本页面是其 Web 客户端。分析任务在后端异步执行，可在任务列表页跟踪进度并查看结果。"
            </p>
            <ul class="about-page__facts">
                <li>"提交分析：股票分析页"</li>
                <li>"跟踪进度：任务列表页"</li>
                <li>"服务状态：仪表板"</li>
            </ul>
        </section>
    }
}
