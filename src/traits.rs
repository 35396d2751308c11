pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

pub trait TryEval<T> {
    type Output;

    fn try_eval(&self, pt: &T) -> Option<Self::Output>;
}
