use std::time::Duration;

use widgetry::{
    Drawable, EventCtx, GfxCtx, HorizontalAlignment, Key, Line, Panel, State, Text, UpdateType,
    VerticalAlignment, Widget,
};

use pendulum_model::{FrameClock, Scheduler};

use crate::plane::{self, Plane};
use crate::{App, Transition};

pub struct Viewer {
    panel: Panel,
    scheduler: Scheduler,
    clock: FrameClock,
    plane: Plane,
    draw_grid: Drawable,
    draw_pendulum: Drawable,
}

impl Viewer {
    pub fn new_state(
        ctx: &mut EventCtx,
        app: &App,
        mut scheduler: Scheduler,
    ) -> Box<dyn State<App>> {
        ctx.canvas.map_dims = plane::map_dims();
        ctx.canvas.center_on_map_pt(plane::center());

        scheduler.start();
        let mut state = Self {
            panel: Panel::new_builder(Widget::col(vec![
                Line("Double pendulum").small_heading().into_widget(ctx),
                Widget::placeholder(ctx, "time"),
            ]))
            .aligned(HorizontalAlignment::Left, VerticalAlignment::Top)
            .build(ctx),
            scheduler,
            clock: FrameClock::new(app.redraw_interval),
            plane: Plane::default(),
            draw_grid: ctx.upload(plane::draw_grid()),
            draw_pendulum: Drawable::empty(ctx),
        };
        // The first frame shows up right away
        state.tick(ctx);
        Box::new(state)
    }

    fn tick(&mut self, ctx: &mut EventCtx) {
        self.scheduler.tick(&mut self.plane);
        if let Some((batch, label)) = self.plane.take_presented() {
            self.draw_pendulum = ctx.upload(batch);
            let time = Text::from(Line(label).big_monospaced()).into_widget(ctx);
            self.panel.replace(ctx, "time", time);
        }
    }
}

impl State<App> for Viewer {
    fn event(&mut self, ctx: &mut EventCtx, app: &mut App) -> Transition {
        ctx.canvas_movement();
        self.panel.event(ctx);

        if ctx.input.pressed(Key::Escape) {
            app.stop.raise();
        }
        if app.stop.is_raised() {
            self.scheduler.abort();
        }

        if !self.scheduler.state().is_terminal() {
            if let Some(real_dt) = ctx.input.nonblocking_is_update_event() {
                ctx.input.use_update_event();
                if self
                    .clock
                    .advance(Duration::from_secs_f64(real_dt.inner_seconds()))
                {
                    self.tick(ctx);
                }
            }
            ctx.request_update(UpdateType::Game);
        }

        Transition::Keep
    }

    fn draw(&self, g: &mut GfxCtx, _: &App) {
        g.redraw(&self.draw_grid);
        g.redraw(&self.draw_pendulum);
        self.panel.draw(g);
    }
}
