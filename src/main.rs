use touch_overlay::components::App;

fn main() {
    touch_overlay::util::init_logging();
    yew::Renderer::<App>::new().render();
}
