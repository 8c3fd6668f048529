use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
      <nav class="relative container mx-auto p-4">
        <div class="flex items-center justify-between">
          <div class="font-bold">
            <A href = Page::Home.path()>"Rate My Loo"</A>
          </div>
          <div class="flex space-x-6">
            <A href = Page::Home.path()>{ Page::Home.title() }</A>
            <A href = Page::Loos.path()>{ Page::Loos.title() }</A>
          </div>
        </div>
      </nav>
    }
}
