//! The container initialization pipeline.

use std::fmt;
use std::rc::Rc;

use glide_core::{Container, FireOnce, NavigationContext, ScrollRuntimeFactory, ViewContext};
use tracing::debug;

use crate::hooks::PageHooks;
use crate::reveal::{plan_load_reveals, STAGGER_DEFAULT};
use crate::stages::{InertScroll, InertStages, LoadRevealStage, RevealMarkup, ScrollRevealStage, TextPreparer};
use crate::timing::plan_group_delays;

/// Composes the independent view-setup steps into one ordered, idempotent
/// sequence, run once per swapped-in container.
///
/// Every collaborator defaults to an inert implementation, so a pipeline
/// with no animation engine still walks each step and leaves the view in
/// its final state.
pub struct ContainerInitPipeline {
    nav: Rc<NavigationContext>,
    hooks: PageHooks,
    text: Rc<dyn TextPreparer>,
    markup: Rc<dyn RevealMarkup>,
    load_reveal: Rc<dyn LoadRevealStage>,
    scroll_reveal: Rc<dyn ScrollRevealStage>,
    scroll_factory: Rc<dyn ScrollRuntimeFactory>,
    stagger: f32,
}

impl ContainerInitPipeline {
    /// Create a pipeline with inert collaborators.
    pub fn new(nav: Rc<NavigationContext>) -> Self {
        Self {
            nav,
            hooks: PageHooks::new(),
            text: Rc::new(InertStages),
            markup: Rc::new(InertStages),
            load_reveal: Rc::new(InertStages),
            scroll_reveal: Rc::new(InertStages),
            scroll_factory: Rc::new(InertScroll),
            stagger: STAGGER_DEFAULT,
        }
    }

    /// Set the page hook registry.
    pub fn with_hooks(mut self, hooks: PageHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Set the structural text preparer.
    pub fn with_text_preparer(mut self, text: impl TextPreparer + 'static) -> Self {
        self.text = Rc::new(text);
        self
    }

    /// Set the reveal markup source.
    pub fn with_reveal_markup(mut self, markup: impl RevealMarkup + 'static) -> Self {
        self.markup = Rc::new(markup);
        self
    }

    /// Set the load reveal stage.
    pub fn with_load_reveal(mut self, stage: impl LoadRevealStage + 'static) -> Self {
        self.load_reveal = Rc::new(stage);
        self
    }

    /// Set the scroll reveal stage.
    pub fn with_scroll_reveal(mut self, stage: impl ScrollRevealStage + 'static) -> Self {
        self.scroll_reveal = Rc::new(stage);
        self
    }

    /// Set the scroll runtime factory.
    pub fn with_scroll_factory(mut self, factory: impl ScrollRuntimeFactory + 'static) -> Self {
        self.scroll_factory = Rc::new(factory);
        self
    }

    /// Set the interval between successive load-reveal elements.
    pub fn with_stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    /// The shared navigation context.
    pub fn context(&self) -> &Rc<NavigationContext> {
        &self.nav
    }

    /// Run the outgoing route's destroy hook.
    pub fn destroy_route(&self, namespace: &str) {
        self.hooks.run_destroy(namespace);
    }

    /// Initialize one container.
    ///
    /// Safe to run again on a different container: the opening flush clears
    /// any residue from the previous view, and the scroll runtime is
    /// recreated rather than reused.
    pub async fn run(&self, container: &Container, ctx: &ViewContext) {
        debug!(
            namespace = %ctx.namespace,
            first_load = ctx.is_first_load,
            "container init"
        );

        // 1. clean slate for this view
        self.nav.cleanups().flush();

        // 2. structural prep before anything queries split lines/letters
        self.text.prepare(container);

        // 3. distribute grouped delays before the load reveals read them
        for group in self.markup.delay_groups(container) {
            let delays = plan_group_delays(&group, ctx);
            if !delays.is_empty() {
                self.markup.apply_group_delays(container, &delays);
            }
        }

        // 4. hidden end-states must be in place before any loader runs
        let plan = plan_load_reveals(&self.markup.load_reveals(container), ctx, self.stagger);
        self.load_reveal.prime(container, &plan);

        // 5. guarded starter; the page hook may fire it early
        let starter = {
            let stage = Rc::clone(&self.load_reveal);
            let container = container.clone();
            let plan = plan.clone();
            FireOnce::new(move || stage.play(&container, &plan))
        };
        ctx.set_reveal_starter(starter.clone());

        // 6. route hook; unknown namespace means no hook
        self.hooks.run_init(container, ctx).await;

        // 7. fallback start when the hook did not fire it early
        starter.fire();

        // 8. scroll-linked reveals are load/navigation agnostic
        self.scroll_reveal.attach(container);

        // 9. scroll runtime back online with fresh measurements
        self.nav.install_scroll(self.scroll_factory.as_ref());
        self.nav.refresh_scroll();
        self.nav.start_scroll();
    }
}

impl fmt::Debug for ContainerInitPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerInitPipeline")
            .field("hooks", &self.hooks)
            .field("stagger", &self.stagger)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use glide_core::{ScrollRuntime, ScrollRuntimeFactory};

    use crate::hooks::PageHook;
    use crate::reveal::{RevealConfig, RevealElement, RevealPlan};
    use crate::timing::{ComputedDelay, DelayGroup, GroupMember};

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recording {
        log: Log,
        elements: Vec<RevealElement>,
        groups: Vec<DelayGroup>,
    }

    impl Recording {
        fn new(log: Log) -> Self {
            Self {
                log,
                elements: Vec::new(),
                groups: Vec::new(),
            }
        }
    }

    impl TextPreparer for Recording {
        fn prepare(&self, _container: &Container) {
            self.log.borrow_mut().push("prepare".into());
        }
    }

    impl RevealMarkup for Recording {
        fn load_reveals(&self, _container: &Container) -> Vec<RevealElement> {
            self.elements.clone()
        }

        fn delay_groups(&self, _container: &Container) -> Vec<DelayGroup> {
            self.groups.clone()
        }

        fn apply_group_delays(&self, _container: &Container, delays: &[ComputedDelay]) {
            let ids: Vec<&str> = delays.iter().map(|d| d.id.as_str()).collect();
            self.log
                .borrow_mut()
                .push(format!("group-delays:{}", ids.join(",")));
        }
    }

    impl LoadRevealStage for Recording {
        fn prime(&self, _container: &Container, plan: &RevealPlan) {
            self.log
                .borrow_mut()
                .push(format!("prime:{}", plan.entries.len()));
        }

        fn play(&self, _container: &Container, plan: &RevealPlan) {
            self.log
                .borrow_mut()
                .push(format!("play:{}", plan.entries.len()));
        }
    }

    impl ScrollRevealStage for Recording {
        fn attach(&self, _container: &Container) {
            self.log.borrow_mut().push("scroll-attach".into());
        }
    }

    struct LoggingScroll {
        log: Log,
    }

    impl ScrollRuntime for LoggingScroll {
        fn stop(&self) {
            self.log.borrow_mut().push("scroll:stop".into());
        }
        fn start(&self) {
            self.log.borrow_mut().push("scroll:start".into());
        }
        fn refresh(&self) {
            self.log.borrow_mut().push("scroll:refresh".into());
        }
    }

    struct LoggingScrollFactory {
        log: Log,
    }

    impl ScrollRuntimeFactory for LoggingScrollFactory {
        fn create(&self) -> Box<dyn ScrollRuntime> {
            self.log.borrow_mut().push("scroll:create".into());
            Box::new(LoggingScroll {
                log: Rc::clone(&self.log),
            })
        }
    }

    struct LoggingHook {
        log: Log,
        fire_early: bool,
    }

    #[async_trait(?Send)]
    impl PageHook for LoggingHook {
        async fn init(&self, _container: &Container, ctx: &ViewContext) {
            self.log.borrow_mut().push("hook:init".into());
            if self.fire_early {
                ctx.start_reveal_early();
            }
        }

        fn destroy(&self, namespace: &str) {
            self.log.borrow_mut().push(format!("hook:destroy:{namespace}"));
        }
    }

    fn element(id: &str) -> RevealElement {
        RevealElement::new(id, RevealConfig::default())
    }

    fn pipeline_with(log: &Log, recording: fn(Log) -> Recording, fire_early: bool) -> ContainerInitPipeline {
        let nav = Rc::new(NavigationContext::new());
        ContainerInitPipeline::new(nav)
            .with_text_preparer(recording(Rc::clone(log)))
            .with_reveal_markup(recording(Rc::clone(log)))
            .with_load_reveal(recording(Rc::clone(log)))
            .with_scroll_reveal(recording(Rc::clone(log)))
            .with_scroll_factory(LoggingScrollFactory {
                log: Rc::clone(log),
            })
            .with_hooks(PageHooks::new().with_hook(
                "home",
                LoggingHook {
                    log: Rc::clone(log),
                    fire_early,
                },
            ))
    }

    fn with_elements(log: Log) -> Recording {
        let mut recording = Recording::new(log);
        recording.elements = vec![element("hero"), element("intro")];
        recording
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = pipeline_with(&log, with_elements, false);

        {
            let log = Rc::clone(&log);
            pipeline
                .context()
                .cleanups()
                .register(move || log.borrow_mut().push("cleanup".into()));
        }

        let container = Container::new("home", "main");
        let ctx = ViewContext::first_load("home");
        pipeline.run(&container, &ctx).await;

        assert_eq!(
            *log.borrow(),
            vec![
                "cleanup",
                "prepare",
                "prime:2",
                "hook:init",
                "play:2",
                "scroll-attach",
                "scroll:create",
                "scroll:refresh",
                "scroll:start",
            ]
        );
    }

    #[tokio::test]
    async fn test_hook_fires_starter_early_exactly_once() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = pipeline_with(&log, with_elements, true);

        let container = Container::new("home", "main");
        let ctx = ViewContext::navigation("home");
        pipeline.run(&container, &ctx).await;

        let entries = log.borrow().clone();
        let play_count = entries.iter().filter(|e| e.starts_with("play:")).count();
        assert_eq!(play_count, 1);

        // The early fire happens inside the hook, before the fallback point.
        let hook_at = entries.iter().position(|e| e == "hook:init").unwrap();
        let play_at = entries.iter().position(|e| e.starts_with("play:")).unwrap();
        let attach_at = entries.iter().position(|e| e == "scroll-attach").unwrap();
        assert!(hook_at < play_at);
        assert!(play_at < attach_at);
    }

    #[tokio::test]
    async fn test_unknown_namespace_still_runs_all_other_steps() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = pipeline_with(&log, with_elements, false);

        let container = Container::new("mystery", "main");
        let ctx = ViewContext::navigation("mystery");
        pipeline.run(&container, &ctx).await;

        let entries = log.borrow().clone();
        assert!(!entries.iter().any(|e| e == "hook:init"));
        assert!(entries.iter().any(|e| e == "prepare"));
        assert!(entries.iter().any(|e| e.starts_with("play:")));
        assert!(entries.iter().any(|e| e == "scroll:start"));
    }

    #[tokio::test]
    async fn test_group_delays_are_planned_and_applied() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let nav = Rc::new(NavigationContext::new());

        let mut markup = Recording::new(Rc::clone(&log));
        markup.groups = vec![
            DelayGroup::new(0.0, 0.1)
                .with_member(GroupMember::new("a"))
                .with_member(GroupMember::new("b")),
            DelayGroup::new(0.0, 0.1).with_when(crate::reveal::RevealWhen::First),
        ];

        let pipeline = ContainerInitPipeline::new(nav).with_reveal_markup(markup);
        let container = Container::new("home", "main");
        let ctx = ViewContext::navigation("home");
        pipeline.run(&container, &ctx).await;

        let entries = log.borrow().clone();
        assert_eq!(
            entries.iter().filter(|e| e.starts_with("group-delays:")).count(),
            1
        );
        assert!(entries.iter().any(|e| e == "group-delays:a,b"));
    }

    #[tokio::test]
    async fn test_rerun_recreates_scroll_runtime() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = pipeline_with(&log, with_elements, false);

        let container = Container::new("home", "main");
        pipeline.run(&container, &ViewContext::first_load("home")).await;
        log.borrow_mut().clear();

        pipeline
            .run(&container, &ViewContext::navigation("home"))
            .await;

        let entries = log.borrow().clone();
        let stop_at = entries.iter().position(|e| e == "scroll:stop").unwrap();
        let create_at = entries.iter().position(|e| e == "scroll:create").unwrap();
        assert!(stop_at < create_at);
        assert!(pipeline.context().has_scroll());
    }

    #[tokio::test]
    async fn test_destroy_route_reaches_hook() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pipeline = pipeline_with(&log, with_elements, false);

        pipeline.destroy_route("home");
        pipeline.destroy_route("mystery");

        assert_eq!(*log.borrow(), vec!["hook:destroy:home"]);
    }
}
