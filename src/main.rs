use agencynest::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
